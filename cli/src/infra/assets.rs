//! Asset bundle adapters.
//!
//! `EmbeddedAssets` serves the bundle compiled into the binary with
//! `include_dir!`; `DirAssets` serves an unpacked bundle from a directory on
//! disk. Both expose logical names of the form `assets/<relative path>`.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

use crate::application::ports::AssetBundle;

/// Logical-name prefix shared by every asset in a bundle.
pub const BUNDLE_ROOT: &str = "assets/";

/// The asset bundle, compiled in at build time.
static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Join path components with `/`, the logical-name separator.
fn logical_name(relative: &Path) -> String {
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    format!("{BUNDLE_ROOT}{}", parts.join("/"))
}

fn strip_bundle_root(name: &str) -> Result<&str> {
    name.strip_prefix(BUNDLE_ROOT)
        .ok_or_else(|| anyhow::anyhow!("asset not found: {name}"))
}

// ── Embedded bundle ───────────────────────────────────────────────────────────

/// The bundle shipped inside the binary.
pub struct EmbeddedAssets;

fn collect_embedded(dir: &Dir<'static>, out: &mut Vec<String>) {
    for file in dir.files() {
        out.push(logical_name(file.path()));
    }
    for sub in dir.dirs() {
        collect_embedded(sub, out);
    }
}

impl AssetBundle for EmbeddedAssets {
    async fn manifest(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        collect_embedded(&EMBEDDED_ASSETS, &mut names);
        names.sort();
        Ok(names)
    }

    async fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        let relative = strip_bundle_root(name)?;
        EMBEDDED_ASSETS
            .get_file(relative)
            .map(|f| Cow::Borrowed(f.contents()))
            .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))
    }
}

// ── Directory bundle ──────────────────────────────────────────────────────────

/// An unpacked bundle rooted at a directory on disk.
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("inspecting {}", path.display()))?;
        if file_type.is_dir() {
            walk(root, &path, out)?;
        } else {
            let relative = path.strip_prefix(root).context("walking asset tree")?;
            out.push(logical_name(relative));
        }
    }
    Ok(())
}

impl AssetBundle for DirAssets {
    async fn manifest(&self) -> Result<Vec<String>> {
        let root = self.root.clone();
        let mut names = tokio::task::spawn_blocking(move || {
            let mut names = Vec::new();
            walk(&root, &root, &mut names)?;
            Ok::<_, anyhow::Error>(names)
        })
        .await
        .context("spawn_blocking for asset manifest")??;
        names.sort();
        Ok(names)
    }

    async fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        let relative = strip_bundle_root(name)?;
        if relative.split('/').any(|segment| segment == "..") {
            anyhow::bail!("asset name leaves the bundle: {name}");
        }
        let path = self.root.join(relative);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Cow::Owned(bytes))
    }
}
