//! Repository traits (interfaces)
//!
//! These traits define the contracts for the I/O collaborators of the
//! extraction core: where the archive bytes come from and where the
//! extracted bitmaps go.

mod archive_source;
mod file_store;

pub use archive_source::{ArchiveSource, SourceError};
pub use file_store::{FileStore, FileStoreError, WriteResult};
