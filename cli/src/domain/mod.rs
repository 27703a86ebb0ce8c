//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod env;
pub mod error;
pub mod layout;
pub mod payload;
pub mod platform;

pub use config::ProvisionConfig;
pub use env::{ENGINE_VARS, EnvAction, FIREBIRD, FIREBIRD_LOCK, FIREBIRD_TMP, needs_assignment};
pub use error::ProvisionError;
pub use layout::{FirebirdLayout, LayoutOverrides};
pub use payload::{ASSET_PREFIX, payload_target};
pub use platform::{SUPPORTED_OS, SupportedPlatform};
