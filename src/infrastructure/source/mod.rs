//! Archive source implementations

mod file_source;
mod mmap_source;

pub use file_source::FileSource;
pub use mmap_source::MmapSource;
