//! Output name registry
//!
//! Sanitizes proposed filenames and hands out names that are unique within
//! a run, ignoring ASCII and Unicode case, so the output directory behaves
//! the same on case-insensitive filesystems.

use std::collections::HashSet;

/// Characters rejected by the most restrictive common filesystem
pub const ILLEGAL_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every illegal filename character with `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Splits `name` into base and extension at the last dot
///
/// The extension keeps its dot. Leading dots never start an extension, so
/// `".bmp"` has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if !name[..dot].chars().all(|c| c == '.') => name.split_at(dot),
        _ => (name, ""),
    }
}

/// Set of names already claimed in the current run
#[derive(Debug, Default, Clone)]
pub struct UsedNameSet {
    used: HashSet<String>,
}

impl UsedNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` was already claimed, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(&name.to_lowercase())
    }

    /// Claims `name`, or the first free `{base}_{n}{ext}` for n = 1, 2, ...
    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let (base, ext) = split_extension(name);
        let mut n = 1u32;

        while self.contains(&candidate) {
            candidate = format!("{base}_{n}{ext}");
            n += 1;
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_each_illegal_char() {
        assert_eq!(sanitize_filename("ui/menu:bg.bmp"), "ui_menu_bg.bmp");
        assert_eq!(sanitize_filename(r#"<a>"b"\c|d?e*.bmp"#), "_a__b__c_d_e_.bmp");
        assert_eq!(sanitize_filename("plain-name_1.bmp"), "plain-name_1.bmp");
    }

    #[test]
    fn split_extension_cases() {
        assert_eq!(split_extension("a.bmp"), ("a", ".bmp"));
        assert_eq!(split_extension("a.b.BMP"), ("a.b", ".BMP"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".bmp"), (".bmp", ""));
        assert_eq!(split_extension("..x.bmp"), ("..x", ".bmp"));
    }

    #[test]
    fn claim_suffixes_duplicates() {
        let mut used = UsedNameSet::new();
        assert_eq!(used.claim("a.bmp"), "a.bmp");
        assert_eq!(used.claim("a.bmp"), "a_1.bmp");
        assert_eq!(used.claim("A.BMP"), "A_2.BMP");
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn claim_skips_names_taken_by_earlier_suffixing() {
        let mut used = UsedNameSet::new();
        used.claim("a_1.bmp");
        used.claim("a.bmp");
        assert_eq!(used.claim("a.bmp"), "a_2.bmp");
    }

    #[test]
    fn contains_ignores_case() {
        let mut used = UsedNameSet::new();
        used.claim("Photo.bmp");
        assert!(used.contains("PHOTO.BMP"));
        assert!(!used.contains("photo2.bmp"));
    }
}
