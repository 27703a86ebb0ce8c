//! Directory ensurer.

use std::path::Path;

use crate::application::ports::LocalFs;
use crate::domain::{FirebirdLayout, ProvisionError, SupportedPlatform};

/// Create root, tmp and lock directories where missing.
///
/// Idempotent: directories that already exist are left alone.
///
/// # Errors
///
/// Returns [`ProvisionError::Filesystem`] for the first directory that cannot
/// be checked or created.
pub async fn ensure_directories(
    _platform: SupportedPlatform,
    fs: &impl LocalFs,
    layout: &FirebirdLayout,
) -> Result<(), ProvisionError> {
    for dir in layout.dirs() {
        if path_exists(fs, dir).await? {
            continue;
        }
        create_dir(fs, dir).await?;
    }
    Ok(())
}

pub(crate) async fn path_exists(fs: &impl LocalFs, path: &Path) -> Result<bool, ProvisionError> {
    fs.exists(path)
        .await
        .map_err(|source| ProvisionError::filesystem(path, source))
}

pub(crate) async fn create_dir(fs: &impl LocalFs, dir: &Path) -> Result<(), ProvisionError> {
    tracing::debug!(dir = %dir.display(), "creating directory");
    fs.create_dir_all(dir)
        .await
        .map_err(|source| ProvisionError::filesystem(dir, source))
}
