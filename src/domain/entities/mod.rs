//! Domain entities
//!
//! Core business objects that represent the fundamental concepts
//! of bitmap extraction: located streams, recovered names, and the
//! pairing between them.

mod bitmap_record;
mod filename_token;
mod output_assignment;

pub use bitmap_record::{BMP_SIZE_FIELD_END, BitmapRecord};
pub use filename_token::FilenameToken;
pub use output_assignment::{NameOrigin, OutputAssignment};
