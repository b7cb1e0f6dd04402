//! Archive source trait
//!
//! Defines the interface for obtaining the complete content of an archive
//! as one contiguous, immutable byte slice.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when opening an archive
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Archive not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to memory-map {path}: {message}")]
    Map { path: String, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl SourceError {
    /// Classifies an open/read error for `path`
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                SourceError::PermissionDenied(path.display().to_string())
            }
            _ => SourceError::IoError(error),
        }
    }
}

/// Trait for random access to the raw archive bytes
///
/// The scanners only ever see `bytes()`; implementations decide whether the
/// content lives in a heap buffer or a memory mapping.
///
/// # Example
///
/// ```ignore
/// let source = FileSource::open(Path::new("image00.tpf"))?;
/// let records = BitmapScanner::default().scan(source.bytes());
/// ```
pub trait ArchiveSource {
    /// Opens the archive at `path`
    fn open(path: &Path) -> Result<Self, SourceError>
    where
        Self: Sized;

    /// Returns the full archive content
    fn bytes(&self) -> &[u8];

    /// Returns the path the archive was loaded from
    fn path(&self) -> &Path;

    /// Returns the archive size in bytes
    fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Returns true if the archive holds no bytes
    fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}
