//! Environment configurator: points the engine at its directories.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::application::ports::Environment;
use crate::domain::{
    EnvAction, FIREBIRD, FIREBIRD_LOCK, FIREBIRD_TMP, FirebirdLayout, ProvisionError,
    SupportedPlatform, needs_assignment,
};

/// What happened to one engine variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvAssignment {
    pub name: &'static str,
    pub action: EnvAction,
    /// Value the variable holds after configuration.
    pub value: PathBuf,
}

/// Assign `FIREBIRD`, `FIREBIRD_TMP` and `FIREBIRD_LOCK` to the layout's paths.
///
/// A variable that already holds a non-blank value is preserved unless
/// `force` is set.
///
/// # Errors
///
/// Returns [`ProvisionError::Environment`] if the environment rejects a value.
pub fn configure_environment(
    _platform: SupportedPlatform,
    env: &impl Environment,
    layout: &FirebirdLayout,
    force: bool,
) -> Result<Vec<EnvAssignment>, ProvisionError> {
    let wanted = [
        (FIREBIRD, &layout.root),
        (FIREBIRD_TMP, &layout.tmp),
        (FIREBIRD_LOCK, &layout.lock),
    ];

    let mut assignments = Vec::with_capacity(wanted.len());
    for (name, path) in wanted {
        let current = env.get(name);
        if needs_assignment(current.as_deref(), force) {
            env.set(name, path.as_os_str())
                .map_err(|e| ProvisionError::Environment {
                    name: name.to_owned(),
                    reason: format!("{e:#}"),
                })?;
            tracing::debug!(var = name, value = %path.display(), "assigned environment variable");
            assignments.push(EnvAssignment {
                name,
                action: EnvAction::Assigned,
                value: path.clone(),
            });
        } else {
            let kept = current.unwrap_or_default();
            tracing::debug!(var = name, value = ?kept, "preserved environment variable");
            assignments.push(EnvAssignment {
                name,
                action: EnvAction::Preserved,
                value: PathBuf::from(kept),
            });
        }
    }
    Ok(assignments)
}

/// Current values of the engine variables, for read-only reporting.
pub fn current_environment(env: &impl Environment) -> Vec<(&'static str, Option<OsString>)> {
    crate::domain::ENGINE_VARS
        .into_iter()
        .map(|name| (name, env.get(name)))
        .collect()
}
