//! Root resolver: default location of the engine root.

use std::path::PathBuf;

use crate::application::ports::StorageResolver;
use crate::domain::layout::default_root_in;
use crate::domain::{FirebirdLayout, LayoutOverrides, ProvisionError, SupportedPlatform};

/// Default engine root: `<private data dir>/firebird`.
///
/// # Errors
///
/// Returns [`ProvisionError::StorageUnavailable`] if the host cannot report a
/// private data directory.
pub fn resolve_default_root(
    _platform: SupportedPlatform,
    storage: &impl StorageResolver,
) -> Result<PathBuf, ProvisionError> {
    let data_dir = storage
        .private_data_dir()
        .map_err(|e| ProvisionError::StorageUnavailable {
            reason: format!("{e:#}"),
        })?;
    Ok(default_root_in(&data_dir))
}

/// Fill in every omitted path. The storage resolver is only consulted when
/// no root override is given.
///
/// # Errors
///
/// Propagates [`resolve_default_root`] failures.
pub fn resolve_layout(
    platform: SupportedPlatform,
    storage: &impl StorageResolver,
    overrides: &LayoutOverrides,
) -> Result<FirebirdLayout, ProvisionError> {
    let layout = FirebirdLayout::resolve(overrides, || resolve_default_root(platform, storage))?;
    tracing::debug!(
        root = %layout.root.display(),
        tmp = %layout.tmp.display(),
        lock = %layout.lock.display(),
        "resolved layout"
    );
    Ok(layout)
}
