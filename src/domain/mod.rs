//! Domain layer - Core business logic
//!
//! This module contains the extraction entities, the repository traits for
//! the archive source and the output store, and the scanning and pairing
//! services. Nothing here touches the filesystem directly.

pub mod entities;
pub mod repositories;
pub mod services;
