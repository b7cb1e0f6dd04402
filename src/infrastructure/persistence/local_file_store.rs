//! Local file store implementation
//!
//! Writes extracted bitmaps verbatim to a directory on the local filesystem.

use crate::domain::repositories::{FileStore, FileStoreError, WriteResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system store
///
/// Existing files with the same name are truncated and replaced.
pub struct LocalFileStore {
    output_dir: PathBuf,
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl LocalFileStore {
    /// Resolves `filename` inside the output directory
    ///
    /// Names must be a single path component; anything that would escape the
    /// directory is refused.
    fn output_path(&self, filename: &str) -> Result<PathBuf, FileStoreError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
            || filename.contains('\0');

        if invalid {
            return Err(FileStoreError::InvalidName(filename.to_string()));
        }

        Ok(self.output_dir.join(filename))
    }
}

impl FileStore for LocalFileStore {
    fn new(output_dir: &Path) -> Result<Self, FileStoreError> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|e| {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    FileStoreError::PermissionDenied(output_dir.display().to_string())
                } else {
                    FileStoreError::IoError(e)
                }
            })?;
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            files_written: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    fn write(&self, filename: &str, data: &[u8]) -> Result<WriteResult, FileStoreError> {
        let output_path = self.output_path(filename)?;

        let mut output_file = File::create(&output_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileStoreError::PermissionDenied(output_path.display().to_string())
            } else {
                FileStoreError::IoError(e)
            }
        })?;
        output_file.write_all(data)?;
        output_file.sync_all()?;

        let saved_size = data.len() as u64;

        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(saved_size, Ordering::Relaxed);

        tracing::trace!(path = %output_path.display(), bytes = saved_size, "file written");

        Ok(WriteResult {
            filename: filename.to_string(),
            saved_path: output_path,
            saved_size,
        })
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}
