//! Memory-mapped archive source
//!
//! Maps the archive read-only instead of copying it to the heap. Useful for
//! very large archives; the scanners see the same contiguous slice either way.

use crate::domain::repositories::{ArchiveSource, SourceError};
use memmap2::Mmap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Memory-mapped archive reader
///
/// # Example
///
/// ```ignore
/// let source = MmapSource::open(Path::new("image00.tpf"))?;
/// let tokens = FilenameScanner::new().scan(source.bytes());
/// ```
pub struct MmapSource {
    path: PathBuf,
    /// `None` for an empty file, which cannot be mapped
    mmap: Option<Mmap>,
}

impl MmapSource {
    /// Returns a slice at the specified offset and length
    #[inline]
    pub fn slice_at(&self, offset: u64, length: usize) -> Option<&[u8]> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(length)?;
        self.bytes().get(start..end)
    }
}

impl ArchiveSource for MmapSource {
    fn open(path: &Path) -> Result<Self, SourceError> {
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| SourceError::from_io(path, e))?;

        let size = file.metadata()?.len();
        let mmap = if size == 0 {
            None
        } else {
            // SAFETY: the map is read-only and the archive is not expected to
            // change while the extraction runs.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| SourceError::Map {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            Some(mmap)
        };

        tracing::debug!(path = %path.display(), bytes = size, "archive mapped");

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mmap_open_nonexistent() {
        let result = MmapSource::open(Path::new("/nonexistent/file"));
        assert!(result.is_err());
    }

    #[test]
    fn test_mmap_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Hello, memory-mapped world!").unwrap();
        file.flush().unwrap();

        let source = MmapSource::open(file.path()).unwrap();
        assert_eq!(source.bytes(), b"Hello, memory-mapped world!");
    }

    #[test]
    fn test_mmap_slice_at() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Zero-copy access!").unwrap();
        file.flush().unwrap();

        let source = MmapSource::open(file.path()).unwrap();
        assert_eq!(source.slice_at(5, 4).unwrap(), b"copy");
        assert!(source.slice_at(15, 4).is_none());
    }

    #[test]
    fn test_mmap_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let source = MmapSource::open(file.path()).unwrap();
        assert!(source.is_empty());
    }
}
