//! Bitmap scanner service
//!
//! Locates Windows bitmap streams inside an archive that carries no index.
//! The only structural signal is the "BM" magic followed by the file's own
//! little-endian size field, so every hit is checked against the buffer
//! bounds and a configurable size ceiling before it is accepted.

use crate::domain::entities::{BMP_SIZE_FIELD_END, BitmapRecord};
use byteorder::{ByteOrder, LittleEndian};
use memchr::memmem;

/// Magic bytes at the start of every bitmap file
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// Default ceiling for a declared bitmap size (exclusive)
pub const DEFAULT_MAX_BMP_SIZE: u64 = 100_000_000;

/// Why a "BM" hit was not accepted as a bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureRejection {
    /// Declared size is zero
    ZeroSize,
    /// Declared size reaches the configured ceiling
    TooLarge { size: u32 },
    /// Declared size runs past the end of the buffer
    Overrun { size: u32 },
}

/// Scanner for "BM" bitmap streams
///
/// Accepted records are skipped over entirely before the scan resumes, so
/// pixel data that happens to contain "BM" is never reported. Rejected hits
/// only advance the cursor by one byte.
///
/// # Example
///
/// ```
/// use bmpharvest::domain::services::BitmapScanner;
///
/// let mut data = b"BM".to_vec();
/// data.extend_from_slice(&10u32.to_le_bytes());
/// data.extend_from_slice(&[0; 4]);
///
/// let records = BitmapScanner::default().scan(&data);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].size(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitmapScanner {
    max_size: u64,
}

impl BitmapScanner {
    /// Creates a scanner rejecting declared sizes at or above `max_size`
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Returns the size ceiling
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Scans `data` and returns all accepted bitmap records in offset order
    pub fn scan(&self, data: &[u8]) -> Vec<BitmapRecord> {
        let limit = data.len().saturating_sub(BMP_SIZE_FIELD_END);
        let finder = memmem::Finder::new(&BMP_MAGIC);
        let mut records = Vec::new();
        let mut cursor = 0usize;

        while cursor < limit {
            // Every offset between cursor and the next hit fails the magic test
            let Some(pos) = finder.find(&data[cursor..]) else {
                break;
            };
            let offset = cursor + pos;
            if offset >= limit {
                break;
            }

            match self.check_signature(data, offset) {
                Ok(size) => {
                    tracing::trace!(offset, size, "bitmap accepted");
                    records.push(BitmapRecord::new(offset as u64, size));
                    cursor = offset + size as usize;
                }
                Err(reason) => {
                    tracing::trace!(offset, ?reason, "signature rejected");
                    cursor = offset + 1;
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            bytes = data.len(),
            "bitmap scan complete"
        );
        records
    }

    /// Validates the size field of the signature at `offset`
    ///
    /// The caller guarantees `offset + 6 <= data.len()`.
    fn check_signature(&self, data: &[u8], offset: usize) -> Result<u32, SignatureRejection> {
        let size = LittleEndian::read_u32(&data[offset + 2..offset + BMP_SIZE_FIELD_END]);

        if size == 0 {
            return Err(SignatureRejection::ZeroSize);
        }
        if u64::from(size) >= self.max_size {
            return Err(SignatureRejection::TooLarge { size });
        }
        if offset as u64 + u64::from(size) > data.len() as u64 {
            return Err(SignatureRejection::Overrun { size });
        }

        Ok(size)
    }
}

impl Default for BitmapScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BMP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(size: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(size as usize);
        data.extend_from_slice(&BMP_MAGIC);
        data.extend_from_slice(&size.to_le_bytes());
        data.resize(size as usize, 0xAA);
        data
    }

    #[test]
    fn finds_single_bitmap() {
        let mut data = vec![0u8; 10];
        data.extend(bitmap(26));
        data.extend_from_slice(&[0u8; 10]);

        let records = BitmapScanner::default().scan(&data);
        assert_eq!(records, vec![BitmapRecord::new(10, 26)]);
    }

    #[test]
    fn overrun_is_false_positive() {
        let mut data = vec![0u8; 4];
        data.extend_from_slice(b"BM");
        data.extend_from_slice(&1000u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 20]);

        assert!(BitmapScanner::default().scan(&data).is_empty());
    }

    #[test]
    fn rejected_hit_advances_one_byte() {
        // Bogus header immediately followed by a real one
        let mut data = b"BM".to_vec();
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let inner = bitmap(12);
        data.extend_from_slice(&inner);

        let records = BitmapScanner::default().scan(&data);
        assert_eq!(records, vec![BitmapRecord::new(6, 12)]);
    }

    #[test]
    fn skips_magic_inside_accepted_body() {
        let mut outer = bitmap(40);
        outer[10..12].copy_from_slice(b"BM");
        outer[12..16].copy_from_slice(&8u32.to_le_bytes());
        outer.extend(bitmap(16));

        let records = BitmapScanner::default().scan(&outer);
        assert_eq!(
            records,
            vec![BitmapRecord::new(0, 40), BitmapRecord::new(40, 16)]
        );
    }

    #[test]
    fn zero_size_rejected() {
        let mut data = b"BM".to_vec();
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);

        assert!(BitmapScanner::default().scan(&data).is_empty());
    }

    #[test]
    fn size_at_ceiling_rejected() {
        let data = bitmap(64);
        assert!(BitmapScanner::new(64).scan(&data).is_empty());
        assert_eq!(BitmapScanner::new(65).scan(&data).len(), 1);
    }

    #[test]
    fn short_buffers_yield_nothing() {
        for len in 0..=6 {
            let mut data = b"BM".to_vec();
            data.extend_from_slice(&(len as u32).to_le_bytes());
            data.truncate(len);
            assert!(BitmapScanner::default().scan(&data).is_empty());
        }
    }

    #[test]
    fn signature_in_final_six_bytes_ignored() {
        // A 6-byte bitmap ending exactly at the buffer end sits at len - 6
        let mut data = vec![0u8; 4];
        data.extend(bitmap(6));
        assert!(BitmapScanner::default().scan(&data).is_empty());
    }

    #[test]
    fn bitmap_filling_whole_buffer() {
        let data = bitmap(7);
        assert_eq!(
            BitmapScanner::default().scan(&data),
            vec![BitmapRecord::new(0, 7)]
        );
    }
}
