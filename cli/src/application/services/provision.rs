//! Application service: the provisioning use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::PathBuf;

use serde::Serialize;

use crate::application::ports::{
    AssetBundle, Environment, LocalFs, PlatformProbe, ProgressReporter, StorageResolver,
};
use crate::application::services::deploy::{DeployOutcome, deploy_assets};
use crate::application::services::directories::{ensure_directories, path_exists};
use crate::application::services::environment::{
    EnvAssignment, configure_environment, current_environment,
};
use crate::application::services::root::resolve_layout;
use crate::domain::{FirebirdLayout, LayoutOverrides, ProvisionError, SupportedPlatform};

/// Caller input for [`provision`].
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    pub overrides: LayoutOverrides,
    /// Re-copy the payload and overwrite already-set variables.
    pub force_redeploy: bool,
}

/// Outcome of the `provision` use-case.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub layout: FirebirdLayout,
    /// Whether root existed before this call.
    pub root_existed: bool,
    pub deployment: DeployOutcome,
    pub environment: Vec<EnvAssignment>,
}

/// Prepare the embedded engine for use.
///
/// Runs resolve, ensure directories, deploy assets, configure environment,
/// in that order. The first failing step aborts the rest and its error is
/// returned unchanged. Completed steps are not rolled back; the whole call
/// is safe to retry.
///
/// # Errors
///
/// Returns [`ProvisionError::UnsupportedPlatform`] before any side effect when
/// not running on Android, otherwise the error of the failing step.
pub async fn provision(
    platform: &impl PlatformProbe,
    storage: &impl StorageResolver,
    fs: &impl LocalFs,
    bundle: &impl AssetBundle,
    env: &impl Environment,
    reporter: &impl ProgressReporter,
    opts: &ProvisionOptions,
) -> Result<ProvisionReport, ProvisionError> {
    let token = SupportedPlatform::check(platform.os())?;

    let layout = resolve_layout(token, storage, &opts.overrides)?;
    let root_existed = path_exists(fs, &layout.root).await?;

    reporter.step("creating engine directories...");
    ensure_directories(token, fs, &layout).await?;

    // First-ever setup must deploy even without an explicit force: root is
    // created by the step above, so the deployer alone would skip.
    let redeploy = opts.force_redeploy || !root_existed;
    reporter.step("deploying engine files...");
    let deployment = deploy_assets(token, fs, bundle, &layout.root, redeploy).await?;
    match deployment {
        DeployOutcome::Skipped => reporter.success("engine files already in place"),
        DeployOutcome::Deployed { files, .. } => {
            reporter.success(&format!("deployed {files} engine files"));
        }
    }

    reporter.step("configuring environment...");
    let environment = configure_environment(token, env, &layout, opts.force_redeploy)?;
    for assignment in &environment {
        if assignment.action == crate::domain::EnvAction::Preserved {
            reporter.warn(&format!(
                "{} already set to {}, left unchanged",
                assignment.name,
                assignment.value.display()
            ));
        }
    }
    reporter.success("Firebird embedded engine ready");

    Ok(ProvisionReport {
        layout,
        root_existed,
        deployment,
        environment,
    })
}

/// Presence of one layout directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirStatus {
    pub path: PathBuf,
    pub exists: bool,
}

/// Current value of one engine variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvStatus {
    pub name: &'static str,
    pub value: Option<String>,
}

/// Read-only snapshot of a layout, as reported by `fbprep show`.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutStatus {
    pub layout: FirebirdLayout,
    pub dirs: Vec<DirStatus>,
    pub environment: Vec<EnvStatus>,
}

/// Resolve the layout and report what is already in place, without mutating
/// the filesystem or the environment.
///
/// # Errors
///
/// Returns [`ProvisionError::UnsupportedPlatform`] when not running on
/// Android, a root resolution error, or [`ProvisionError::Filesystem`] when a
/// directory's presence cannot be determined.
pub async fn inspect(
    platform: &impl PlatformProbe,
    storage: &impl StorageResolver,
    fs: &impl LocalFs,
    env: &impl Environment,
    overrides: &LayoutOverrides,
) -> Result<LayoutStatus, ProvisionError> {
    let token = SupportedPlatform::check(platform.os())?;
    let layout = resolve_layout(token, storage, overrides)?;

    let mut dirs = Vec::with_capacity(3);
    for dir in layout.dirs() {
        dirs.push(DirStatus {
            path: dir.to_path_buf(),
            exists: path_exists(fs, dir).await?,
        });
    }
    let environment = current_environment(env)
        .into_iter()
        .map(|(name, value)| EnvStatus {
            name,
            value: value.map(|v| v.to_string_lossy().into_owned()),
        })
        .collect();

    Ok(LayoutStatus {
        layout,
        dirs,
        environment,
    })
}
