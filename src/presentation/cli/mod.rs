//! CLI module

mod commands;
mod progress;
mod runner;

pub use commands::Cli;
pub use progress::ProgressReporter;
pub use runner::{run, run_with_source};
