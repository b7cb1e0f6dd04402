//! File store trait
//!
//! Defines the interface for persisting extracted bitmaps.

use crate::domain::entities::OutputAssignment;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when writing extracted files
#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid output filename: {0:?}")]
    InvalidName(String),

    #[error("Range {offset}+{size} exceeds archive length {len}")]
    RangeOutOfBounds { offset: u64, size: u32, len: usize },

    #[error("Manifest serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of writing a single file
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Name the file was written under
    pub filename: String,
    /// Full path of the written file
    pub saved_path: PathBuf,
    /// Number of bytes written
    pub saved_size: u64,
}

/// Trait for writing extracted bitmaps to storage
///
/// Writes are verbatim: no transformation is applied to the bytes, and an
/// existing file with the same name is replaced.
pub trait FileStore: Send + Sync {
    /// Creates a store rooted at `output_dir`, creating it if needed
    fn new(output_dir: &Path) -> Result<Self, FileStoreError>
    where
        Self: Sized;

    /// Writes `data` to a file called `filename` inside the store
    fn write(&self, filename: &str, data: &[u8]) -> Result<WriteResult, FileStoreError>;

    /// Writes the slice of `archive` described by `assignment`
    fn write_assignment(
        &self,
        assignment: &OutputAssignment,
        archive: &[u8],
    ) -> Result<WriteResult, FileStoreError> {
        let record = assignment.source();
        let data = record
            .slice(archive)
            .ok_or(FileStoreError::RangeOutOfBounds {
                offset: record.offset(),
                size: record.size(),
                len: archive.len(),
            })?;
        self.write(assignment.filename(), data)
    }

    /// Returns the output directory
    fn output_dir(&self) -> &Path;

    /// Returns the number of files written so far
    fn files_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}
