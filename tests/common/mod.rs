//! Shared archive builders for the integration tests

#![allow(dead_code)]

/// Builds a bitmap stream of exactly `size` bytes whose header declares `size`
pub fn bitmap(size: u32, fill: u8) -> Vec<u8> {
    assert!(size >= 6, "a bitmap header needs six bytes");
    let mut data = Vec::with_capacity(size as usize);
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&size.to_le_bytes());
    data.resize(size as usize, fill);
    data
}

/// Incremental builder for synthetic archives
///
/// Records where each bitmap was placed so tests can compare extracted
/// bytes against the exact source slice.
#[derive(Default)]
pub struct ArchiveBuilder {
    data: Vec<u8>,
    bitmaps: Vec<(usize, Vec<u8>)>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a NUL-padded filename string
    pub fn name(mut self, name: &str) -> Self {
        self.data.extend_from_slice(&[0, 0]);
        self.data.extend_from_slice(name.as_bytes());
        self.data.extend_from_slice(&[0, 0]);
        self
    }

    /// Appends a bitmap of `size` bytes filled with `fill`
    pub fn bitmap(mut self, size: u32, fill: u8) -> Self {
        let bytes = bitmap(size, fill);
        self.bitmaps.push((self.data.len(), bytes.clone()));
        self.data.extend(bytes);
        self
    }

    /// Appends raw bytes
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Returns (offset, bytes) of every bitmap appended so far
    pub fn placed(&self) -> &[(usize, Vec<u8>)] {
        &self.bitmaps
    }

    /// Returns the archive bytes built so far
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
