//! Provisioning against a real temporary directory with the production
//! filesystem adapter and bundles.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fbprep_cli::application::services::deploy::DeployOutcome;
use fbprep_cli::application::services::provision::{ProvisionOptions, provision};
use fbprep_cli::domain::LayoutOverrides;
use fbprep_cli::infra::assets::{DirAssets, EmbeddedAssets};
use fbprep_cli::infra::fs::TokioFs;

use crate::mocks::{FakePlatform, FakeStorage, MemEnv, NoopReporter};

fn options(root: &Path, force_redeploy: bool) -> ProvisionOptions {
    ProvisionOptions {
        overrides: LayoutOverrides {
            root: Some(root.to_path_buf()),
            ..LayoutOverrides::default()
        },
        force_redeploy,
    }
}

fn mtimes(paths: &[PathBuf]) -> Vec<SystemTime> {
    paths
        .iter()
        .map(|p| {
            std::fs::metadata(p)
                .and_then(|m| m.modified())
                .expect("mtime")
        })
        .collect()
}

#[tokio::test]
async fn embedded_payload_lands_under_root_once() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path().join("firebird");
    let env = MemEnv::new();

    let report = provision(
        &FakePlatform::android(),
        &FakeStorage::new(),
        &TokioFs,
        &EmbeddedAssets,
        &env,
        &NoopReporter,
        &options(&root, false),
    )
    .await
    .expect("first provision");

    assert!(matches!(report.deployment, DeployOutcome::Deployed { .. }));
    assert!(root.join("tmp").is_dir());
    assert!(root.join("lock").is_dir());
    let payload = vec![
        root.join("firebird.conf"),
        root.join("databases.conf"),
        root.join("plugins.conf"),
        root.join("intl").join("fbintl.conf"),
    ];
    for file in &payload {
        assert!(file.is_file(), "{} missing", file.display());
    }
    assert!(!root.join("README.md").exists());

    let before = mtimes(&payload);
    let report = provision(
        &FakePlatform::android(),
        &FakeStorage::new(),
        &TokioFs,
        &EmbeddedAssets,
        &env,
        &NoopReporter,
        &options(&root, false),
    )
    .await
    .expect("second provision");

    assert_eq!(report.deployment, DeployOutcome::Skipped);
    assert_eq!(mtimes(&payload), before);
}

#[tokio::test]
async fn forced_redeploy_restores_modified_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path().join("firebird");
    let env = MemEnv::new();

    for force in [false, true] {
        if force {
            std::fs::write(root.join("firebird.conf"), b"broken").expect("tamper");
        }
        provision(
            &FakePlatform::android(),
            &FakeStorage::new(),
            &TokioFs,
            &EmbeddedAssets,
            &env,
            &NoopReporter,
            &options(&root, force),
        )
        .await
        .expect("provision");
    }

    let conf = std::fs::read_to_string(root.join("firebird.conf")).expect("read");
    assert!(conf.contains("ServerMode"), "{conf}");
}

#[tokio::test]
async fn directory_bundle_is_filtered_by_prefix() {
    let bundle_dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(bundle_dir.path().join("firebird/intl")).expect("mkdir");
    std::fs::write(bundle_dir.path().join("firebird/firebird.conf"), b"conf").expect("write");
    std::fs::write(bundle_dir.path().join("firebird/intl/fbintl.conf"), b"intl").expect("write");
    std::fs::write(bundle_dir.path().join("icon.png"), b"png").expect("write");

    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path().join("fb");

    let report = provision(
        &FakePlatform::android(),
        &FakeStorage::new(),
        &TokioFs,
        &DirAssets::new(bundle_dir.path()),
        &MemEnv::new(),
        &NoopReporter,
        &options(&root, false),
    )
    .await
    .expect("provision");

    assert_eq!(report.deployment, DeployOutcome::Deployed { files: 2, bytes: 8 });
    assert_eq!(std::fs::read(root.join("intl/fbintl.conf")).expect("read"), b"intl");
    assert!(!root.join("icon.png").exists());
}
