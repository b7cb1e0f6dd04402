//! Presentation layer
//!
//! Command-line parsing and console output.

pub mod cli;
