//! Bitmap record entity
//!
//! A contiguous byte range of the archive that holds one complete bitmap
//! stream, as located by the bitmap scanner.

use std::ops::Range;

/// Length of the "BM" magic plus the little-endian total-size field
pub const BMP_SIZE_FIELD_END: usize = 6;

/// A bitmap stream located inside the raw archive buffer
///
/// Records produced by a single scan never overlap and are ordered by
/// `offset`. The invariant `0 < size` and `offset + size <= buffer length`
/// is established by the scanner; the record itself only carries the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapRecord {
    /// Byte index of the "BM" signature
    offset: u64,
    /// Self-declared total size taken from the header
    size: u32,
}

impl BitmapRecord {
    /// Creates a new record
    pub fn new(offset: u64, size: u32) -> Self {
        Self { offset, size }
    }

    /// Returns the offset of the signature
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the declared size in bytes
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the first byte past the end of the record
    pub fn end(&self) -> u64 {
        self.offset + u64::from(self.size)
    }

    /// Returns the record as a byte range suitable for slicing
    pub fn range(&self) -> Range<usize> {
        self.offset as usize..self.end() as usize
    }

    /// Returns the bytes of this record, or `None` if it does not fit in `buffer`
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.range())
    }

    /// Returns true if the two records share at least one byte
    pub fn overlaps(&self, other: &BitmapRecord) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}
