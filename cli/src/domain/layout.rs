//! Directory layout of a provisioned Firebird root.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Subdirectory of the application's private data directory used as the
/// default engine root.
pub const ROOT_DIR_NAME: &str = "firebird";

/// Default temporary-files directory, relative to root.
pub const TMP_DIR_NAME: &str = "tmp";

/// Default lock-files directory, relative to root.
pub const LOCK_DIR_NAME: &str = "lock";

/// Caller-supplied path overrides. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOverrides {
    pub root: Option<PathBuf>,
    pub tmp: Option<PathBuf>,
    pub lock: Option<PathBuf>,
}

/// The three directories the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirebirdLayout {
    /// Engine root: configuration, message catalogs, collation data.
    pub root: PathBuf,
    /// Scratch space for sorts and index rebuilds.
    pub tmp: PathBuf,
    /// Lock files coordinating access to a database.
    pub lock: PathBuf,
}

impl FirebirdLayout {
    /// Layout with `tmp` and `lock` at their default places under `root`.
    #[must_use]
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            tmp: root.join(TMP_DIR_NAME),
            lock: root.join(LOCK_DIR_NAME),
            root,
        }
    }

    /// Apply `overrides` on top of the defaults derived from the effective root.
    ///
    /// `default_root` is consulted only when no root override is given, so a
    /// custom root also moves the default `tmp` and `lock` directories.
    pub fn resolve<E>(
        overrides: &LayoutOverrides,
        default_root: impl FnOnce() -> Result<PathBuf, E>,
    ) -> Result<Self, E> {
        let root = match &overrides.root {
            Some(root) => root.clone(),
            None => default_root()?,
        };
        let defaults = Self::under(root);
        Ok(Self {
            tmp: overrides.tmp.clone().unwrap_or(defaults.tmp),
            lock: overrides.lock.clone().unwrap_or(defaults.lock),
            root: defaults.root,
        })
    }

    /// All three directories, root first.
    #[must_use]
    pub fn dirs(&self) -> [&Path; 3] {
        [&self.root, &self.tmp, &self.lock]
    }
}

/// Default engine root inside the application's private data directory.
#[must_use]
pub fn default_root_in(private_data_dir: &Path) -> PathBuf {
    private_data_dir.join(ROOT_DIR_NAME)
}
