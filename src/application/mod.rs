//! Application layer
//!
//! Use cases that orchestrate the domain services and repositories.

pub mod dto;
mod extract_images;
mod plan_extraction;

pub use extract_images::{ExtractImagesUseCase, ExtractProgressCallback};
pub use plan_extraction::PlanExtractionUseCase;
