//! JSON output helpers used by every `--json` code path.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::ProvisionError;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine code for an error: the `ProvisionError` code when the chain
/// carries one, `"internal"` otherwise.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|e| e.downcast_ref::<ProvisionError>())
        .map_or("internal", ProvisionError::code)
}

/// Pretty-print any serializable report to stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a non-UTF-8 path).
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}
