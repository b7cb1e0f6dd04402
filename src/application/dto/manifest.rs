//! Run manifest DTO
//!
//! Machine-readable record of what a run extracted and from where.

use crate::domain::entities::NameOrigin;
use crate::domain::services::Pairing;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub offset: u64,
    pub size: u32,
    pub origin: NameOrigin,
    /// Hex SHA-256 of the extracted bytes
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub source: String,
    pub max_size: u64,
    pub filenames_found: usize,
    pub bitmaps_found: usize,
    pub paired: usize,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Builds the manifest for `pairing` over `archive`
    ///
    /// Assignments whose range does not fit `archive` are skipped; the pairer
    /// never produces them from a scan of the same buffer.
    pub fn build(source: &str, max_size: u64, pairing: &Pairing, archive: &[u8]) -> Self {
        let entries = pairing
            .assignments
            .iter()
            .filter_map(|assignment| {
                let record = assignment.source();
                let data = record.slice(archive)?;
                Some(ManifestEntry {
                    filename: assignment.filename().to_string(),
                    offset: record.offset(),
                    size: record.size(),
                    origin: assignment.origin(),
                    sha256: hex::encode(Sha256::digest(data)),
                })
            })
            .collect();

        Self {
            source: source.to_string(),
            max_size,
            filenames_found: pairing.filenames_found,
            bitmaps_found: pairing.bitmaps_found,
            paired: pairing.paired,
            entries,
        }
    }
}
