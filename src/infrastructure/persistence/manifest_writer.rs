//! Manifest writer
//!
//! Persists the JSON description of a run next to (or apart from) the
//! extracted files.

use crate::application::dto::Manifest;
use crate::domain::repositories::FileStoreError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `manifest` as pretty-printed JSON to `path`
///
/// Parent directories are created as needed.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), FileStoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), entries = manifest.entries.len(), "manifest written");
    Ok(())
}
