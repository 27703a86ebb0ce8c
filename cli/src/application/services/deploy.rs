//! Asset deployer: copies the engine payload out of the asset bundle.

use std::path::Path;

use serde::Serialize;

use crate::application::ports::{AssetBundle, LocalFs};
use crate::application::services::directories::{create_dir, path_exists};
use crate::domain::{ProvisionError, SupportedPlatform, payload_target};

/// Name reported when the bundle manifest itself cannot be listed.
pub const MANIFEST_NAME: &str = "<asset manifest>";

/// Outcome of [`deploy_assets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeployOutcome {
    /// Root already existed and no redeploy was requested.
    Skipped,
    /// Payload copied into root.
    Deployed { files: usize, bytes: u64 },
}

/// Copy every payload asset into `root`.
///
/// When `root` already exists and `redeploy` is false this is a no-op.
/// Otherwise root is created, and each asset under the payload prefix is
/// written to the matching path under root, overwriting existing files.
/// Assets outside the prefix belong to the host application and are skipped.
///
/// # Errors
///
/// Returns [`ProvisionError::AssetLoad`] if the manifest or an asset cannot be
/// read, and [`ProvisionError::Filesystem`] if root cannot be checked or a
/// target cannot be written.
pub async fn deploy_assets(
    _platform: SupportedPlatform,
    fs: &impl LocalFs,
    bundle: &impl AssetBundle,
    root: &Path,
    redeploy: bool,
) -> Result<DeployOutcome, ProvisionError> {
    if !redeploy && path_exists(fs, root).await? {
        tracing::info!(root = %root.display(), "payload already deployed, skipping");
        return Ok(DeployOutcome::Skipped);
    }
    create_dir(fs, root).await?;

    let manifest = bundle
        .manifest()
        .await
        .map_err(|e| ProvisionError::asset_load(MANIFEST_NAME, &e))?;

    let mut files = 0;
    let mut bytes = 0;
    for name in &manifest {
        let Some(target) = payload_target(name, root)? else {
            continue;
        };
        let contents = bundle
            .load(name)
            .await
            .map_err(|e| ProvisionError::asset_load(name, &e))?;
        if let Some(parent) = target.parent().filter(|parent| *parent != root) {
            create_dir(fs, parent).await?;
        }
        tracing::debug!(asset = %name, target = %target.display(), len = contents.len(), "writing payload file");
        fs.write(&target, &contents)
            .await
            .map_err(|source| ProvisionError::filesystem(&target, source))?;
        files += 1;
        bytes += contents.len() as u64;
    }

    tracing::info!(root = %root.display(), files, bytes, "payload deployed");
    Ok(DeployOutcome::Deployed { files, bytes })
}
