//! Domain types for fbprep configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::layout::LayoutOverrides;

/// Provisioning defaults stored in `config.yaml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisionConfig {
    /// Engine root directory.
    pub root: Option<PathBuf>,
    /// Temporary-files directory.
    pub tmp: Option<PathBuf>,
    /// Lock-files directory.
    pub lock: Option<PathBuf>,
    /// Application private data directory used to derive the default root.
    pub data_dir: Option<PathBuf>,
    /// Directory standing in for the asset bundle instead of the embedded one.
    pub assets_dir: Option<PathBuf>,
    /// Always redeploy the payload and overwrite the environment.
    pub force_redeploy: Option<bool>,
}

impl ProvisionConfig {
    /// Merge command-line path flags over the configured ones.
    #[must_use]
    pub fn overrides(&self, flags: LayoutOverrides) -> LayoutOverrides {
        LayoutOverrides {
            root: flags.root.or_else(|| self.root.clone()),
            tmp: flags.tmp.or_else(|| self.tmp.clone()),
            lock: flags.lock.or_else(|| self.lock.clone()),
        }
    }
}
