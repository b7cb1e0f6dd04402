//! Extraction report DTO

use crate::domain::entities::{NameOrigin, OutputAssignment};
use crate::domain::services::Pairing;
use std::path::PathBuf;
use std::time::Duration;

/// One line of the name-to-source mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub filename: String,
    pub offset: u64,
    pub size: u32,
    pub origin: NameOrigin,
}

impl From<&OutputAssignment> for ExtractedFile {
    fn from(assignment: &OutputAssignment) -> Self {
        Self {
            filename: assignment.filename().to_string(),
            offset: assignment.source().offset(),
            size: assignment.source().size(),
            origin: assignment.origin(),
        }
    }
}

/// Result of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Archive path
    pub source_path: PathBuf,
    /// Output directory, `None` for a dry run
    pub output_dir: Option<PathBuf>,
    /// Filename tokens found in the archive
    pub filenames_found: usize,
    /// Bitmaps found in the archive
    pub bitmaps_found: usize,
    /// Positional pairs made
    pub paired: usize,
    /// Mapping of every output file, in bitmap order
    pub files: Vec<ExtractedFile>,
    /// Total bytes written
    pub bytes_written: u64,
    /// Duration of the run
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a report describing `pairing`, before anything is written
    pub fn from_pairing(source_path: PathBuf, pairing: &Pairing) -> Self {
        Self {
            source_path,
            output_dir: None,
            filenames_found: pairing.filenames_found,
            bitmaps_found: pairing.bitmaps_found,
            paired: pairing.paired,
            files: pairing.assignments.iter().map(ExtractedFile::from).collect(),
            bytes_written: 0,
            duration: Duration::ZERO,
        }
    }

    /// Number of files named by fallback
    pub fn fallback_count(&self) -> usize {
        self.bitmaps_found - self.paired
    }

    /// Number of filename tokens with no bitmap
    pub fn discarded_names(&self) -> usize {
        self.filenames_found - self.paired
    }

    /// Returns true if nothing was written
    pub fn is_dry_run(&self) -> bool {
        self.output_dir.is_none()
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} filenames, {} bitmaps, {} paired",
            self.filenames_found, self.bitmaps_found, self.paired
        );

        if self.fallback_count() > 0 {
            summary.push_str(&format!(", {} fallback names", self.fallback_count()));
        }
        if self.discarded_names() > 0 {
            summary.push_str(&format!(", {} names unused", self.discarded_names()));
        }

        match &self.output_dir {
            Some(dir) => summary.push_str(&format!(
                "\n{} files ({} bytes) written to {}",
                self.files.len(),
                self.bytes_written,
                dir.display()
            )),
            None => summary.push_str("\nDry run: nothing written"),
        }

        summary
    }
}
