//! Tests for the directory ensurer step.

#![allow(clippy::expect_used)]

use fbprep_cli::application::services::directories::ensure_directories;
use fbprep_cli::domain::{FirebirdLayout, ProvisionError, SupportedPlatform};

use crate::mocks::MemFs;

fn token() -> SupportedPlatform {
    SupportedPlatform::check("android").expect("android is supported")
}

#[tokio::test]
async fn creates_all_missing_directories() {
    let fs = MemFs::new();
    let layout = FirebirdLayout::under("/r");

    ensure_directories(token(), &fs, &layout).await.expect("ensure");

    for dir in layout.dirs() {
        assert!(fs.is_dir(dir), "{} missing", dir.display());
    }
}

#[tokio::test]
async fn existing_directories_are_not_touched() {
    let fs = MemFs::new().with_dir("/r/tmp");
    let layout = FirebirdLayout::under("/r");

    ensure_directories(token(), &fs, &layout).await.expect("ensure");
    assert_eq!(fs.created_dirs(), vec![std::path::PathBuf::from("/r/lock")]);

    fs.clear_ops();
    ensure_directories(token(), &fs, &layout).await.expect("again");
    assert!(fs.ops().is_empty());
}

#[tokio::test]
async fn failure_names_the_directory() {
    let fs = MemFs::new().deny("/r");
    let err = ensure_directories(token(), &fs, &FirebirdLayout::under("/r"))
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, ProvisionError::Filesystem { ref path, .. } if path.as_path() == std::path::Path::new("/r")),
        "{err}"
    );
}
