//! Command implementations

pub mod provision;
pub mod show;
pub mod version;

use std::path::PathBuf;

use clap::Args;

use crate::domain::LayoutOverrides;

/// Directory flags shared by `provision` and `show`.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// Engine root directory [default: <data dir>/firebird]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Temporary-files directory [default: <root>/tmp]
    #[arg(long, value_name = "DIR")]
    pub tmp: Option<PathBuf>,

    /// Lock-files directory [default: <root>/lock]
    #[arg(long, value_name = "DIR")]
    pub lock: Option<PathBuf>,

    /// Application private data directory used to derive the default root
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl LayoutArgs {
    /// Split into path overrides and the data directory.
    #[must_use]
    pub fn into_parts(self) -> (LayoutOverrides, Option<PathBuf>) {
        let LayoutArgs {
            root,
            tmp,
            lock,
            data_dir,
        } = self;
        (LayoutOverrides { root, tmp, lock }, data_dir)
    }
}
