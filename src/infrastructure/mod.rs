//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories: archive sources
//! backed by the local filesystem and the output file store.

pub mod persistence;
pub mod source;
