//! Filename scanner service
//!
//! Recovers candidate bitmap names from the text scattered through an
//! archive. Names are returned in document order with duplicates kept; the
//! pairer relies on that order to line names up with bitmaps.

use crate::domain::entities::FilenameToken;
use encoding_rs::SHIFT_JIS;
use regex::bytes::Regex;
use std::sync::LazyLock;

/// ASCII word characters and hyphens, terminated by `.bmp` in any case
const FILENAME_PATTERN: &str = r"(?i-u)[A-Za-z0-9_\-]+\.bmp";

static FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FILENAME_PATTERN).expect("filename pattern is valid"));

/// Scanner for `*.bmp` filename tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameScanner;

impl FilenameScanner {
    pub fn new() -> Self {
        Self
    }

    /// Returns every filename token in `data`, leftmost-first and non-overlapping
    pub fn scan(&self, data: &[u8]) -> Vec<FilenameToken> {
        let tokens: Vec<FilenameToken> = FILENAME_REGEX
            .find_iter(data)
            .map(|m| FilenameToken::new(decode_token(m.as_bytes()), m.start() as u64))
            .collect();

        tracing::debug!(tokens = tokens.len(), "filename scan complete");
        tokens
    }
}

/// Decodes raw token bytes as Shift_JIS, falling back to Latin-1
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
pub fn decode_token(raw: &[u8]) -> String {
    match SHIFT_JIS.decode_without_bom_handling_and_without_replacement(raw) {
        Some(text) => text.into_owned(),
        None => {
            tracing::trace!(len = raw.len(), "Shift_JIS decode failed, using Latin-1");
            decode_latin1(raw)
        }
    }
}

fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().copied().map(char::from).collect()
}
