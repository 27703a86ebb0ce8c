//! Process environment adapter.

use std::ffi::{OsStr, OsString};

use anyhow::Result;

use crate::application::ports::Environment;

/// Reads and writes the real process environment.
///
/// Writes are visible to every native library loaded afterwards in the same
/// process, which is how the engine finds its directories.
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    #[allow(unsafe_code)]
    fn set(&self, name: &str, value: &OsStr) -> Result<()> {
        if value.as_encoded_bytes().contains(&0) {
            anyhow::bail!("value contains a NUL byte");
        }
        // SAFETY: the binary drives provisioning on a current-thread runtime.
        // The only other threads are blocking-pool workers walking an asset
        // directory, which never read the environment, and the engine's
        // native libraries are not loaded yet. Library callers must uphold
        // the same: no concurrent environment access while this runs.
        unsafe { std::env::set_var(name, value) };
        Ok(())
    }
}
