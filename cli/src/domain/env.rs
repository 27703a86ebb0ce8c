//! Environment variables read by the engine's native libraries at load time.

use std::ffi::OsStr;

use serde::Serialize;

/// Engine root: configuration and message files.
pub const FIREBIRD: &str = "FIREBIRD";

/// Temporary-files directory.
pub const FIREBIRD_TMP: &str = "FIREBIRD_TMP";

/// Lock-files directory.
pub const FIREBIRD_LOCK: &str = "FIREBIRD_LOCK";

/// Variable names in the order they are configured: root, tmp, lock.
pub const ENGINE_VARS: [&str; 3] = [FIREBIRD, FIREBIRD_TMP, FIREBIRD_LOCK];

/// Whether a variable must be (re)assigned.
///
/// A value that is absent, empty, or whitespace-only counts as unset.
#[must_use]
pub fn needs_assignment(current: Option<&OsStr>, force: bool) -> bool {
    force || current.is_none_or(|value| value.to_string_lossy().trim().is_empty())
}

/// What the configurator did with one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvAction {
    Assigned,
    Preserved,
}
