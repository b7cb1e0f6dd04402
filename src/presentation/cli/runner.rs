//! Run driver
//!
//! Wires the options to a concrete archive source and file store, prints
//! the informational console output, and returns the report.

use super::progress::ProgressReporter;
use crate::application::dto::{ExtractOptions, ExtractionReport, Manifest};
use crate::application::{ExtractImagesUseCase, PlanExtractionUseCase};
use crate::domain::entities::NameOrigin;
use crate::domain::repositories::{ArchiveSource, FileStore};
use crate::infrastructure::persistence::{LocalFileStore, write_manifest};
use crate::infrastructure::source::{FileSource, MmapSource};
use anyhow::{Context, Result};
use console::style;

/// Runs one extraction as configured by `options`
pub fn run(options: &ExtractOptions) -> Result<ExtractionReport> {
    let input = &options.input_path;

    if options.use_mmap {
        let source = MmapSource::open(input)
            .with_context(|| format!("Failed to open archive: {}", input.display()))?;
        run_with_source(&source, options)
    } else {
        let source = FileSource::open(input)
            .with_context(|| format!("Failed to open archive: {}", input.display()))?;
        run_with_source(&source, options)
    }
}

/// Runs one extraction over an already opened source
pub fn run_with_source<S: ArchiveSource>(
    source: &S,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    let planner = PlanExtractionUseCase::new(options.max_size);
    let pairing = planner.execute(source.bytes());

    println!(
        "[+] Found {} possible filenames",
        style(pairing.filenames_found).green()
    );
    println!("[+] Found {} valid BMPs", style(pairing.bitmaps_found).green());
    println!(
        "[+] Pairing {} filenames with {} BMPs (ordered)",
        pairing.paired, pairing.paired
    );
    if pairing.fallback_count() > 0 {
        println!(
            "[+] {} extra BMPs -> fallback names",
            style(pairing.fallback_count()).yellow()
        );
    }

    let report = if options.dry_run {
        ExtractionReport::from_pairing(source.path().to_path_buf(), &pairing)
    } else {
        let store = LocalFileStore::new(&options.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                options.output_dir.display()
            )
        })?;
        let use_case = ExtractImagesUseCase::new(planner, store);

        let progress = ProgressReporter::for_extraction(pairing.assignments.len() as u64);
        let report =
            use_case.write_pairing(source, &pairing, Some(progress.extraction_callback()));
        progress.finish();
        report?
    };

    for file in &report.files {
        let name = match file.origin {
            NameOrigin::Recovered => style(&file.filename).cyan(),
            NameOrigin::Fallback => style(&file.filename).yellow(),
        };
        println!(
            "    {}  <-  BMP @ 0x{:X} ({} bytes)",
            name, file.offset, file.size
        );
    }

    if let Some(path) = &options.manifest_path {
        let manifest = Manifest::build(
            &source.path().display().to_string(),
            options.max_size,
            &pairing,
            source.bytes(),
        );
        write_manifest(path, &manifest)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    }

    Ok(report)
}
