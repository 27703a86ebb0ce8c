//! fbprep library: exposes modules for integration testing.
//!
//! Prepares the Firebird embedded engine for first use on Android:
//! creates its root, tmp and lock directories, deploys the bundled engine
//! files, and points `FIREBIRD`, `FIREBIRD_TMP` and `FIREBIRD_LOCK` at them.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
