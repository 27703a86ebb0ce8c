//! Typed domain error enum.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`. Every provisioning operation
//! returns [`ProvisionError`]; the CLI layer converts it to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the provisioning operations.
///
/// Every step either completes or fails with one of these variants. Errors
/// propagate unchanged to the caller; nothing is rolled back.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Unsupported platform '{os}': the Firebird embedded engine is only provisioned on Android.")]
    UnsupportedPlatform { os: String },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot load asset '{name}': {reason}")]
    AssetLoad { name: String, reason: String },

    #[error("Cannot resolve the application data directory: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Cannot set environment variable {name}: {reason}")]
    Environment { name: String, reason: String },
}

impl ProvisionError {
    /// Stable machine-readable code, used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedPlatform { .. } => "unsupported_platform",
            Self::Filesystem { .. } => "filesystem",
            Self::AssetLoad { .. } => "asset_load",
            Self::StorageUnavailable { .. } => "storage_unavailable",
            Self::Environment { .. } => "environment",
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Builds an `AssetLoad` error, keeping the full `anyhow` context chain.
    pub(crate) fn asset_load(name: &str, err: &anyhow::Error) -> Self {
        Self::AssetLoad {
            name: name.to_owned(),
            reason: format!("{err:#}"),
        }
    }
}
