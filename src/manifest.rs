//! Manifest writer.
//!
//! Serializes a [`Template`] whose `images` list has been replaced by the
//! planned entries as pretty-printed JSON, conventionally `Contents.json`
//! inside the asset folder. The folder is created if missing.
//!
//! Serialization is deterministic: typed keys are written in declaration
//! order and pass-through keys sorted, so the same plan always produces the
//! same bytes.

use crate::template::Template;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the manifest inside every asset folder.
pub const MANIFEST_FILENAME: &str = "Contents.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Render the manifest exactly as [`write_manifest`] stores it.
pub fn manifest_json(manifest: &Template) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Write `manifest` to `dir/filename`, creating `dir` if needed.
pub fn write_manifest(
    manifest: &Template,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, ManifestError> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, manifest_json(manifest)?)?;
    Ok(path)
}
