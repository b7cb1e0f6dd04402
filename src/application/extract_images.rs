//! Extract images use case
//!
//! Plans the extraction of an archive and writes every assignment through a
//! file store. A write failure aborts the run; files already written are
//! left in place.

use super::plan_extraction::PlanExtractionUseCase;
use crate::application::dto::ExtractionReport;
use crate::domain::repositories::{ArchiveSource, FileStore};
use crate::domain::services::Pairing;
use anyhow::{Context, Result};
use std::time::Instant;

/// Progress callback for writing, called with (current, total)
pub type ExtractProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Extract images use case
pub struct ExtractImagesUseCase<W: FileStore> {
    planner: PlanExtractionUseCase,
    writer: W,
}

impl<W: FileStore> ExtractImagesUseCase<W> {
    /// Creates a new extract use case
    pub fn new(planner: PlanExtractionUseCase, writer: W) -> Self {
        Self { planner, writer }
    }

    /// Returns the underlying store
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Scans `source`, pairs names with bitmaps, and writes the result
    pub fn execute<S: ArchiveSource>(
        &self,
        source: &S,
        progress_callback: Option<ExtractProgressCallback>,
    ) -> Result<ExtractionReport> {
        let pairing = self.planner.execute(source.bytes());
        self.write_pairing(source, &pairing, progress_callback)
    }

    /// Writes an existing plan
    ///
    /// `pairing` must come from planning the same `source`.
    pub fn write_pairing<S: ArchiveSource>(
        &self,
        source: &S,
        pairing: &Pairing,
        progress_callback: Option<ExtractProgressCallback>,
    ) -> Result<ExtractionReport> {
        let start_time = Instant::now();
        let total = pairing.assignments.len();
        let archive = source.bytes();

        tracing::info!(
            "Writing {} files to {}",
            total,
            self.writer.output_dir().display()
        );

        let mut report = ExtractionReport::from_pairing(source.path().to_path_buf(), pairing);
        report.output_dir = Some(self.writer.output_dir().to_path_buf());

        for (index, assignment) in pairing.assignments.iter().enumerate() {
            let result = self
                .writer
                .write_assignment(assignment, archive)
                .with_context(|| format!("Failed to write {}", assignment.filename()))?;

            tracing::debug!(
                "{}  <-  BMP @ 0x{:X} ({} bytes)",
                result.filename,
                assignment.source().offset(),
                result.saved_size
            );
            report.bytes_written += result.saved_size;

            if let Some(ref callback) = progress_callback {
                callback(index + 1, total);
            }
        }

        report.duration = start_time.elapsed();

        tracing::info!(
            "Extraction complete: {} files ({} bytes) in {:.2}s",
            report.files.len(),
            report.bytes_written,
            report.duration.as_secs_f64()
        );

        Ok(report)
    }
}
