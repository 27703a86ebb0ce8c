//! Host platform and private storage adapters.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::{PlatformProbe, StorageResolver};

/// Reports the OS this binary was compiled for.
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn os(&self) -> &str {
        std::env::consts::OS
    }
}

/// Private data directory of the running application.
///
/// On Android the host passes its internal data path (`Context.getFilesDir()`
/// or `ANativeActivity::internalDataPath`) explicitly. Without one, the
/// platform data directory reported by `dirs` is used.
pub struct HostStorage {
    data_dir: Option<PathBuf>,
}

impl HostStorage {
    #[must_use]
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }
}

impl StorageResolver for HostStorage {
    fn private_data_dir(&self) -> Result<PathBuf> {
        self.data_dir
            .clone()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("no data directory given and none reported by the host"))
    }
}
