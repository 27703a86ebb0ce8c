//! Mapping from bundled asset names to files under the engine root.

use std::path::{Path, PathBuf};

use crate::domain::error::ProvisionError;

/// Logical-name prefix identifying the engine payload inside the asset bundle.
pub const ASSET_PREFIX: &str = "assets/firebird/";

/// Compute where a bundled asset lands under `root`.
///
/// Returns `Ok(None)` for assets outside the payload prefix and for bare
/// directory entries (a name ending in `/`). Logical names always use `/` as
/// separator, whatever the host platform.
///
/// # Errors
///
/// Returns [`ProvisionError::AssetLoad`] if the relative part would leave
/// `root` (a `..` component).
pub fn payload_target(name: &str, root: &Path) -> Result<Option<PathBuf>, ProvisionError> {
    let Some(relative) = name.strip_prefix(ASSET_PREFIX) else {
        return Ok(None);
    };
    if relative.is_empty() || relative.ends_with('/') {
        return Ok(None);
    }

    let mut target = root.to_path_buf();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                return Err(ProvisionError::AssetLoad {
                    name: name.to_owned(),
                    reason: "payload path escapes the root directory".to_owned(),
                });
            }
            segment => target.push(segment),
        }
    }
    Ok(Some(target))
}
