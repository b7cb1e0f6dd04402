//! Plan extraction use case
//!
//! Runs both scanners over the archive and pairs their output. No I/O
//! happens here; the resulting plan is what a dry run reports and what the
//! extract use case writes.

use crate::domain::services::{BitmapScanner, FilenameScanner, Pairer, Pairing};
use std::time::Instant;

/// Scans an archive and produces the name-to-bitmap assignments
#[derive(Debug, Clone, Copy)]
pub struct PlanExtractionUseCase {
    filename_scanner: FilenameScanner,
    bitmap_scanner: BitmapScanner,
}

impl PlanExtractionUseCase {
    /// Creates a planner with the given bitmap size ceiling
    pub fn new(max_size: u64) -> Self {
        Self {
            filename_scanner: FilenameScanner::new(),
            bitmap_scanner: BitmapScanner::new(max_size),
        }
    }

    /// Returns the bitmap size ceiling
    pub fn max_size(&self) -> u64 {
        self.bitmap_scanner.max_size()
    }

    /// Executes the plan over `archive`
    ///
    /// Each call uses a fresh name set, so planning the same bytes twice
    /// yields identical assignments.
    pub fn execute(&self, archive: &[u8]) -> Pairing {
        let start_time = Instant::now();

        let filenames = self.filename_scanner.scan(archive);
        tracing::info!("Found {} possible filenames", filenames.len());

        let bitmaps = self.bitmap_scanner.scan(archive);
        tracing::info!("Found {} valid bitmaps", bitmaps.len());

        let pairing = Pairer::new().pair(&filenames, &bitmaps);
        tracing::info!(
            "Paired {} filenames with bitmaps by order in {:.3}s",
            pairing.paired,
            start_time.elapsed().as_secs_f64()
        );

        pairing
    }
}

impl Default for PlanExtractionUseCase {
    fn default() -> Self {
        Self {
            filename_scanner: FilenameScanner::new(),
            bitmap_scanner: BitmapScanner::default(),
        }
    }
}
