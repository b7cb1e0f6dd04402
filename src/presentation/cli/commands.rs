//! CLI arguments using clap

use crate::application::dto::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, ExtractOptions};
use crate::domain::services::DEFAULT_MAX_BMP_SIZE;
use clap::Parser;
use std::path::PathBuf;

/// bmpharvest - Bitmap extraction tool
///
/// Pulls every embedded BMP out of a game asset archive and names each one
/// after the `.bmp` filenames stored alongside them, in order.
#[derive(Parser, Debug)]
#[command(name = "bmpharvest")]
#[command(version)]
#[command(about = "Extract embedded bitmaps from a game asset archive", long_about = None)]
pub struct Cli {
    /// Archive to scan
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Directory for the extracted bitmaps
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Reject bitmaps whose declared size is at or above this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BMP_SIZE)]
    pub max_size: u64,

    /// Memory-map the archive instead of reading it into memory
    #[arg(long)]
    pub mmap: bool,

    /// Print the mapping without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON manifest of the extracted files to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Converts the parsed arguments into run options
    pub fn to_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new(&self.input, &self.output).with_max_size(self.max_size);

        if self.mmap {
            options = options.mmap();
        }
        if self.dry_run {
            options = options.dry_run();
        }
        if let Some(path) = &self.manifest {
            options = options.with_manifest(path);
        }

        options
    }

    /// Default log directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bare_invocation() {
        let cli = Cli::parse_from(["bmpharvest"]);
        let options = cli.to_options();

        assert_eq!(options.input_path, PathBuf::from("image00.tpf"));
        assert_eq!(options.output_dir, PathBuf::from("result"));
        assert_eq!(options.max_size, 100_000_000);
        assert!(!options.dry_run);
        assert!(!options.use_mmap);
        assert!(options.manifest_path.is_none());
        assert_eq!(cli.log_directive(), "warn");
    }

    #[test]
    fn flags_are_forwarded() {
        let cli = Cli::parse_from([
            "bmpharvest",
            "-i",
            "data/ui.tpf",
            "-o",
            "out",
            "--max-size",
            "4096",
            "--mmap",
            "--dry-run",
            "--manifest",
            "out/manifest.json",
            "-d",
        ]);
        let options = cli.to_options();

        assert_eq!(options.input_path, PathBuf::from("data/ui.tpf"));
        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert_eq!(options.max_size, 4096);
        assert!(options.use_mmap);
        assert!(options.dry_run);
        assert_eq!(
            options.manifest_path,
            Some(PathBuf::from("out/manifest.json"))
        );
        assert_eq!(cli.log_directive(), "debug");
    }
}
