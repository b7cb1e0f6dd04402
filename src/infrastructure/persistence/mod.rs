//! Output persistence

mod local_file_store;
mod manifest_writer;

pub use local_file_store::LocalFileStore;
pub use manifest_writer::write_manifest;
