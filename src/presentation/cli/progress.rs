//! Progress reporting for CLI

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a progress reporter for writing extracted files
    pub fn for_extraction(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Writing bitmaps...".to_string());

        Self { bar: Arc::new(bar) }
    }

    /// Finishes and clears the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Gets a callback for write progress
    pub fn extraction_callback(&self) -> Box<dyn Fn(usize, usize) + Send + Sync> {
        let bar = Arc::clone(&self.bar);
        Box::new(move |current: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        })
    }
}
