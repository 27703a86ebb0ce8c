//! Off-platform behavior: every entry point fails before any side effect.

#![allow(clippy::expect_used)]

use fbprep_cli::application::services::provision::{ProvisionOptions, inspect, provision};
use fbprep_cli::domain::{LayoutOverrides, ProvisionError};

use crate::mocks::{FakePlatform, FakeStorage, MemEnv, MemFs, NoopReporter, sample_assets};

const OTHER_PLATFORMS: [&str; 4] = ["linux", "ios", "macos", "windows"];

#[tokio::test]
async fn provision_rejects_other_platforms_without_side_effects() {
    for os in OTHER_PLATFORMS {
        for force_redeploy in [false, true] {
            let fs = MemFs::new();
            let bundle = sample_assets();
            let env = MemEnv::new();
            let storage = FakeStorage::new();
            let opts = ProvisionOptions {
                overrides: LayoutOverrides::default(),
                force_redeploy,
            };

            let err = provision(
                &FakePlatform(os),
                &storage,
                &fs,
                &bundle,
                &env,
                &NoopReporter,
                &opts,
            )
            .await
            .expect_err("should fail");

            assert!(
                matches!(err, ProvisionError::UnsupportedPlatform { os: ref got } if got == os),
                "{err}"
            );
            assert!(fs.ops().is_empty(), "{os}: fs touched");
            assert!(env.ops().is_empty(), "{os}: env touched");
            assert!(bundle.loads().is_empty(), "{os}: bundle read");
            assert_eq!(storage.call_count(), 0, "{os}: storage queried");
        }
    }
}

#[tokio::test]
async fn inspect_rejects_other_platforms() {
    let env = MemEnv::new();
    let err = inspect(
        &FakePlatform("ios"),
        &FakeStorage::new(),
        &MemFs::new(),
        &env,
        &LayoutOverrides::default(),
    )
    .await
    .expect_err("should fail");
    assert_eq!(err.code(), "unsupported_platform");
    assert!(env.ops().is_empty());
}
