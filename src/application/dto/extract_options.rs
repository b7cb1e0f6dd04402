//! Extract options DTO

use crate::domain::services::DEFAULT_MAX_BMP_SIZE;
use std::path::PathBuf;

/// Archive read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "image00.tpf";

/// Directory written when no output path is given
pub const DEFAULT_OUTPUT_DIR: &str = "result";

/// Options for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Path to the archive
    pub input_path: PathBuf,
    /// Directory receiving the extracted bitmaps
    pub output_dir: PathBuf,
    /// Exclusive ceiling on a bitmap's declared size
    pub max_size: u64,
    /// Memory-map the archive instead of reading it
    pub use_mmap: bool,
    /// Scan and pair only, writing nothing
    pub dry_run: bool,
    /// Optional JSON manifest destination
    pub manifest_path: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_size: DEFAULT_MAX_BMP_SIZE,
            use_mmap: false,
            dry_run: false,
            manifest_path: None,
        }
    }
}

impl ExtractOptions {
    /// Creates options for the given archive and output directory
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the size ceiling
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the manifest destination
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    /// Reads the archive through a memory map
    pub fn mmap(mut self) -> Self {
        self.use_mmap = true;
        self
    }

    /// Disables all writes
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}
