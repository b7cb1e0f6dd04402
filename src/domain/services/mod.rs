//! Domain services
//!
//! The extraction core: the two independent scanners and the positional
//! pairer that joins their output.

mod bitmap_scanner;
mod filename_scanner;
mod name_registry;
mod pairer;

pub use bitmap_scanner::{BMP_MAGIC, BitmapScanner, DEFAULT_MAX_BMP_SIZE, SignatureRejection};
pub use filename_scanner::{FilenameScanner, decode_token};
pub use name_registry::{ILLEGAL_FILENAME_CHARS, UsedNameSet, sanitize_filename, split_extension};
pub use pairer::{Pairer, Pairing, fallback_name};
