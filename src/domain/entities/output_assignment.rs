//! Output assignment entity
//!
//! Binds a final, filesystem-safe filename to the bitmap bytes that will be
//! written under that name.

use super::bitmap_record::BitmapRecord;
use serde::Serialize;
use std::fmt;

/// Where the filename of an assignment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrigin {
    /// Paired positionally with a token recovered from the archive text
    Recovered,
    /// Synthesized because the archive held more bitmaps than names
    Fallback,
}

impl fmt::Display for NameOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameOrigin::Recovered => write!(f, "recovered"),
            NameOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// A bitmap record paired with its unique output filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAssignment {
    filename: String,
    source: BitmapRecord,
    origin: NameOrigin,
}

impl OutputAssignment {
    /// Creates a new assignment
    ///
    /// The caller is responsible for `filename` being sanitized and unique
    /// within the run; the pairer is the only producer in this crate.
    pub fn new(filename: String, source: BitmapRecord, origin: NameOrigin) -> Self {
        Self {
            filename,
            source,
            origin,
        }
    }

    /// Returns the output filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the source byte range
    pub fn source(&self) -> &BitmapRecord {
        &self.source
    }

    /// Returns how the filename was obtained
    pub fn origin(&self) -> NameOrigin {
        self.origin
    }

    /// Returns true if the name was synthesized
    pub fn is_fallback(&self) -> bool {
        self.origin == NameOrigin::Fallback
    }
}
