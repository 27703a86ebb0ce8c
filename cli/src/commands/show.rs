//! Show command: report the resolved layout without changing anything.

use anyhow::{Context, Result};

use crate::application::services::provision::{LayoutStatus, inspect};
use crate::commands::LayoutArgs;
use crate::domain::ProvisionConfig;
use crate::infra::env::ProcessEnv;
use crate::infra::fs::TokioFs;
use crate::infra::host::{HostPlatform, HostStorage};
use crate::output::{OutputContext, json};

/// Run the show command.
///
/// # Errors
///
/// Returns an error if the layout cannot be resolved.
pub async fn run(
    ctx: &OutputContext,
    config: &ProvisionConfig,
    args: LayoutArgs,
    json: bool,
) -> Result<()> {
    let (overrides, data_dir) = args.into_parts();
    let storage = HostStorage::new(data_dir.or_else(|| config.data_dir.clone()));
    let status = inspect(
        &HostPlatform,
        &storage,
        &TokioFs,
        &ProcessEnv,
        &config.overrides(overrides),
    )
    .await
    .context("cannot inspect layout")?;

    if json {
        json::print(&status)
    } else {
        print_status(ctx, &status);
        Ok(())
    }
}

fn print_status(ctx: &OutputContext, status: &LayoutStatus) {
    ctx.header("Directories");
    for dir in &status.dirs {
        let state = if dir.exists { "present" } else { "missing" };
        ctx.kv(state, &dir.path.display().to_string());
    }
    ctx.header("Environment");
    for var in &status.environment {
        ctx.kv(var.name, var.value.as_deref().unwrap_or("(unset)"));
    }
}
