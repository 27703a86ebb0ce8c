//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::ProvisionConfig;

// ── Host Ports ────────────────────────────────────────────────────────────────

/// Reports which operating system the process runs on.
pub trait PlatformProbe {
    /// OS identifier in `std::env::consts::OS` form, e.g. `"android"`.
    fn os(&self) -> &str;
}

/// Resolves the per-application private storage location.
pub trait StorageResolver {
    /// The application's private, writable data directory.
    fn private_data_dir(&self) -> Result<PathBuf>;
}

// ── Asset Bundle Port ─────────────────────────────────────────────────────────

/// Read-only bundle of files shipped inside the application.
///
/// Logical names use `/` as separator, e.g. `assets/firebird/firebird.conf`.
#[allow(async_fn_in_trait)]
pub trait AssetBundle {
    /// List every logical asset name in the bundle.
    async fn manifest(&self) -> Result<Vec<String>>;

    /// Load the raw bytes of a single asset.
    async fn load(&self, name: &str) -> Result<Cow<'static, [u8]>>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// The subset of filesystem operations provisioning needs.
///
/// Errors stay `std::io::Error` so callers can report them as filesystem
/// failures with the offending path attached.
#[allow(async_fn_in_trait)]
pub trait LocalFs {
    /// Whether anything exists at `path`. Fails when existence cannot be
    /// determined, e.g. a parent directory is not searchable.
    async fn exists(&self, path: &Path) -> std::io::Result<bool>;

    /// Create `path` and any missing parents.
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()>;
}

// ── Environment Port ──────────────────────────────────────────────────────────

/// Process environment access.
pub trait Environment {
    /// Current value of `name`, if set.
    fn get(&self, name: &str) -> Option<OsString>;

    /// Set `name` to `value`.
    fn set(&self, name: &str, value: &OsStr) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the provisioning config file.
pub trait ConfigStore {
    /// Load the config, returning defaults when no file exists.
    fn load(&self) -> Result<ProvisionConfig>;
    /// Location of the config file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
