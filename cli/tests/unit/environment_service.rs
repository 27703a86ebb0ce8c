//! Tests for the environment configurator step.

#![allow(clippy::expect_used)]

use std::ffi::{OsStr, OsString};

use anyhow::Result;
use fbprep_cli::application::ports::Environment;
use fbprep_cli::application::services::environment::configure_environment;
use fbprep_cli::domain::{
    EnvAction, FIREBIRD, FIREBIRD_LOCK, FIREBIRD_TMP, FirebirdLayout, ProvisionError,
    SupportedPlatform,
};

use crate::mocks::MemEnv;

fn token() -> SupportedPlatform {
    SupportedPlatform::check("android").expect("android is supported")
}

#[test]
fn unset_variables_are_assigned() {
    let env = MemEnv::new();
    let layout = FirebirdLayout::under("/r");

    let result = configure_environment(token(), &env, &layout, false).expect("configure");

    let names: Vec<_> = result.iter().map(|a| a.name).collect();
    assert_eq!(names, vec![FIREBIRD, FIREBIRD_TMP, FIREBIRD_LOCK]);
    assert!(result.iter().all(|a| a.action == EnvAction::Assigned));
    assert_eq!(env.value(FIREBIRD_TMP), Some(OsString::from("/r/tmp")));
}

#[test]
fn set_variables_are_preserved_unless_forced() {
    let layout = FirebirdLayout::under("/r");

    let env = MemEnv::new().with(FIREBIRD_LOCK, "/custom/lock");
    let result = configure_environment(token(), &env, &layout, false).expect("configure");
    assert_eq!(result[2].action, EnvAction::Preserved);
    assert_eq!(result[2].value, std::path::PathBuf::from("/custom/lock"));
    assert_eq!(env.value(FIREBIRD_LOCK), Some(OsString::from("/custom/lock")));

    let result = configure_environment(token(), &env, &layout, true).expect("configure");
    assert_eq!(result[2].action, EnvAction::Assigned);
    assert_eq!(env.value(FIREBIRD_LOCK), Some(OsString::from("/r/lock")));
}

#[test]
fn whitespace_value_counts_as_unset() {
    let env = MemEnv::new().with(FIREBIRD, "\t ");
    configure_environment(token(), &env, &FirebirdLayout::under("/r"), false).expect("configure");
    assert_eq!(env.value(FIREBIRD), Some(OsString::from("/r")));
}

struct RejectingEnv;

impl Environment for RejectingEnv {
    fn get(&self, _: &str) -> Option<OsString> {
        None
    }
    fn set(&self, _: &str, _: &OsStr) -> Result<()> {
        anyhow::bail!("read-only environment")
    }
}

#[test]
fn rejected_write_is_environment_error() {
    let err = configure_environment(token(), &RejectingEnv, &FirebirdLayout::under("/r"), false)
        .expect_err("should fail");
    match err {
        ProvisionError::Environment { name, reason } => {
            assert_eq!(name, FIREBIRD);
            assert!(reason.contains("read-only"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
