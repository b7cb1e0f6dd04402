//! Pairer service
//!
//! Aligns recovered filenames with located bitmaps by position. There is no
//! content-based matching: the archive is assumed to store names and images
//! in the same relative order.

use super::name_registry::{UsedNameSet, sanitize_filename};
use crate::domain::entities::{BitmapRecord, FilenameToken, NameOrigin, OutputAssignment};

/// Name given to the bitmap at `index` when no filename is left for it
pub fn fallback_name(index: usize) -> String {
    format!("image_extra_{index:03}.bmp")
}

/// Outcome of one pairing pass
#[derive(Debug, Clone, Default)]
pub struct Pairing {
    /// Assignments in bitmap order: paired entries first, then fallbacks
    pub assignments: Vec<OutputAssignment>,
    /// Number of filename tokens offered
    pub filenames_found: usize,
    /// Number of bitmaps offered
    pub bitmaps_found: usize,
    /// Number of positional pairs made
    pub paired: usize,
}

impl Pairing {
    /// Bitmaps that received a synthesized name
    pub fn fallback_count(&self) -> usize {
        self.bitmaps_found - self.paired
    }

    /// Filename tokens dropped because no bitmap was left for them
    pub fn discarded_names(&self) -> usize {
        self.filenames_found - self.paired
    }
}

/// Positional aligner owning the name set of a single run
#[derive(Debug, Default)]
pub struct Pairer {
    used: UsedNameSet,
}

impl Pairer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs `filenames[i]` with `bitmaps[i]` and names any leftover bitmaps
    ///
    /// Consumes the pairer so that its name set cannot leak into another run.
    /// Excess filenames are dropped without error.
    pub fn pair(mut self, filenames: &[FilenameToken], bitmaps: &[BitmapRecord]) -> Pairing {
        let count = filenames.len().min(bitmaps.len());
        let mut assignments = Vec::with_capacity(bitmaps.len());

        for (token, record) in filenames.iter().zip(bitmaps) {
            let name = self.used.claim(&sanitize_filename(token.name()));
            if name != token.name() {
                tracing::debug!(original = token.name(), assigned = %name, "renamed token");
            }
            assignments.push(OutputAssignment::new(name, *record, NameOrigin::Recovered));
        }

        // Fallbacks share the name set so they cannot shadow a recovered name
        for (index, record) in bitmaps.iter().enumerate().skip(count) {
            let name = self.used.claim(&fallback_name(index));
            assignments.push(OutputAssignment::new(name, *record, NameOrigin::Fallback));
        }

        if filenames.len() > count {
            tracing::debug!(
                discarded = filenames.len() - count,
                "more filenames than bitmaps"
            );
        }

        Pairing {
            assignments,
            filenames_found: filenames.len(),
            bitmaps_found: bitmaps.len(),
            paired: count,
        }
    }
}
