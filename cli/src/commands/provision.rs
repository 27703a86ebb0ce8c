//! Provision command: deploy the engine payload and configure the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::{AssetBundle, StorageResolver};
use crate::application::services::deploy::DeployOutcome;
use crate::application::services::provision::{ProvisionOptions, ProvisionReport, provision};
use crate::commands::LayoutArgs;
use crate::domain::{EnvAction, ProvisionConfig};
use crate::infra::assets::{DirAssets, EmbeddedAssets};
use crate::infra::env::ProcessEnv;
use crate::infra::fs::TokioFs;
use crate::infra::host::{HostPlatform, HostStorage};
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the provision command.
#[derive(Args, Debug, Default)]
pub struct ProvisionArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Re-copy engine files and overwrite already-set variables
    #[arg(long)]
    pub force: bool,

    /// Use an unpacked asset bundle from DIR instead of the embedded one
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,
}

/// Run the provision command.
///
/// # Errors
///
/// Returns an error if any provisioning step fails.
pub async fn run(
    ctx: &OutputContext,
    config: &ProvisionConfig,
    args: ProvisionArgs,
    json: bool,
) -> Result<()> {
    let ProvisionArgs {
        layout,
        force,
        assets_dir,
    } = args;
    let (overrides, data_dir) = layout.into_parts();
    let opts = ProvisionOptions {
        overrides: config.overrides(overrides),
        force_redeploy: force || config.force_redeploy.unwrap_or(false),
    };
    let storage = HostStorage::new(data_dir.or_else(|| config.data_dir.clone()));

    let report = match assets_dir.or_else(|| config.assets_dir.clone()) {
        Some(dir) => execute(ctx, &storage, &DirAssets::new(dir), &opts).await?,
        None => execute(ctx, &storage, &EmbeddedAssets, &opts).await?,
    };

    if json {
        json::print(&report)
    } else {
        print_summary(ctx, &report);
        Ok(())
    }
}

async fn execute(
    ctx: &OutputContext,
    storage: &impl StorageResolver,
    bundle: &impl AssetBundle,
    opts: &ProvisionOptions,
) -> Result<ProvisionReport> {
    let reporter = TerminalReporter::new(ctx);
    provision(
        &HostPlatform,
        storage,
        &TokioFs,
        bundle,
        &ProcessEnv,
        &reporter,
        opts,
    )
    .await
    .context("provisioning failed")
}

fn print_summary(ctx: &OutputContext, report: &ProvisionReport) {
    ctx.header("Firebird embedded");
    ctx.kv("root ", &report.layout.root.display().to_string());
    ctx.kv("tmp  ", &report.layout.tmp.display().to_string());
    ctx.kv("lock ", &report.layout.lock.display().to_string());
    let deployment = match report.deployment {
        DeployOutcome::Skipped => "skipped (already deployed)".to_string(),
        DeployOutcome::Deployed { files, bytes } => format!("{files} files, {bytes} bytes"),
    };
    ctx.kv("files", &deployment);
    for assignment in &report.environment {
        let action = match assignment.action {
            EnvAction::Assigned => "set",
            EnvAction::Preserved => "kept",
        };
        ctx.kv(
            assignment.name,
            &format!("{} ({action})", assignment.value.display()),
        );
    }
}
