//! Filename token entity
//!
//! A candidate image name recovered from the text embedded in the archive.

use std::fmt;

/// A decoded filename ending in `.bmp`, together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameToken {
    /// Decoded text of the token
    name: String,
    /// Byte offset of the first character of the match
    offset: u64,
}

impl FilenameToken {
    pub fn new(name: impl Into<String>, offset: u64) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for FilenameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
