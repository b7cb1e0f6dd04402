//! Data Transfer Objects

mod extract_options;
mod extraction_report;
mod manifest;

pub use extract_options::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, ExtractOptions};
pub use extraction_report::{ExtractedFile, ExtractionReport};
pub use manifest::{Manifest, ManifestEntry};
