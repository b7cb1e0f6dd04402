//! Buffered archive source
//!
//! Reads the whole archive into a heap buffer. This is the default source;
//! archives are small enough that a single read is the simplest option.

use crate::domain::repositories::{ArchiveSource, SourceError};
use std::fs;
use std::path::{Path, PathBuf};

/// Archive held entirely in memory
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    data: Vec<u8>,
}

impl FileSource {
    /// Wraps bytes that are already in memory
    pub fn from_bytes(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Consumes the source and returns the owned buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl ArchiveSource for FileSource {
    fn open(path: &Path) -> Result<Self, SourceError> {
        let data = fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "archive loaded");

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
