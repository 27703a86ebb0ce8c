//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: filesystem access, asset
//! bundles, process environment, host platform and storage queries.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assets;
pub mod config;
pub mod env;
pub mod fs;
pub mod host;
