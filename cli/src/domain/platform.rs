//! Platform gating.
//!
//! The only way to obtain a [`SupportedPlatform`] token is [`SupportedPlatform::check`],
//! and every provisioning operation takes one. The guard therefore runs once,
//! at the public boundary, before any side effect.

use crate::domain::error::ProvisionError;

/// The one operating system the embedded engine is provisioned on.
pub const SUPPORTED_OS: &str = "android";

/// Proof that the running platform is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedPlatform {
    _private: (),
}

impl SupportedPlatform {
    /// Mint a token if `os` is the supported target.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::UnsupportedPlatform`] for any other OS.
    pub fn check(os: &str) -> Result<Self, ProvisionError> {
        if os == SUPPORTED_OS {
            Ok(Self { _private: () })
        } else {
            Err(ProvisionError::UnsupportedPlatform { os: os.to_owned() })
        }
    }
}
