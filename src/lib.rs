//! Extraction of embedded bitmaps from monolithic game asset archives.
//!
//! The archive carries no index: bitmaps are found by their "BM" header and
//! self-declared size, names are recovered from `*.bmp` strings in the same
//! file, and the two sequences are paired by position.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
