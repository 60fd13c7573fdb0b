//! Drives the library pipelines and renders the human report.

use crate::commands::{FaviconCli, ImagesCli};
use crate::error::CliResult;
use crate::output::ProgressReporter;
use optimizar::{
    format_kb, generate_favicon_candidate, run_with, FileOutcome, PipelineEvent, RunSummary,
};
use std::path::Path;

/// Run the batch image pipeline with console reporting
///
/// # Errors
///
/// Propagates only run-level failures (an asset root that exists but
/// cannot be read); per-file failures are printed and counted.
pub fn run_images(cli: &ImagesCli) -> CliResult<RunSummary> {
    let config = cli.config();
    let mut reporter = ProgressReporter::new(cli.color.should_color(), cli.quiet);

    reporter.line("Starting image optimization...");
    reporter.blank();

    let root = config.asset_root.clone();
    let summary = run_with(&config, |event| match event {
        PipelineEvent::Discovered { count: 0 } => {
            reporter.line("No images found to optimize.");
        }
        PipelineEvent::Discovered { count } => {
            reporter.line(&format!("Found {count} image(s) to optimize"));
            reporter.blank();
            reporter.start_progress(count as u64);
        }
        PipelineEvent::Completed(outcome) => {
            report_file(&reporter, &root, outcome);
        }
    })?;

    reporter.finish_progress();
    tracing::debug!(
        discovered = summary.discovered,
        optimized = summary.optimized,
        failed = summary.failed,
        "image pipeline finished"
    );
    if summary.discovered > 0 {
        reporter.line("Image optimization complete!");
    }
    Ok(summary)
}

fn report_file(reporter: &ProgressReporter, root: &Path, outcome: &FileOutcome) {
    let shown = outcome.path.strip_prefix(root).unwrap_or(&outcome.path);
    reporter.advance(&shown.display().to_string());
    reporter.line(&format!("Optimizing: {}", shown.display()));
    match &outcome.result {
        Ok(report) => reporter.file_report(report),
        Err(e) => reporter.file_error(&outcome.path, &e.to_string()),
    }
    reporter.blank();
}

/// Run the favicon candidate pipeline with console reporting
///
/// A pipeline failure here is recovered locally: it is printed and the
/// process still exits cleanly, since nothing was modified (fail-closed).
///
/// # Errors
///
/// Currently never returns `Err`; the signature leaves room for argument
/// validation.
pub fn run_favicon(cli: &FaviconCli) -> CliResult<()> {
    let config = cli.config();
    let reporter = ProgressReporter::new(cli.color.should_color(), cli.quiet);

    let shown = config
        .favicon_path
        .file_name()
        .map_or_else(|| config.favicon_path.display().to_string(), |n| {
            n.to_string_lossy().into_owned()
        });
    reporter.line(&format!("Optimizing {shown}..."));
    reporter.blank();

    let outcome = match generate_favicon_candidate(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error optimizing favicon: {e}");
            return Ok(());
        }
    };

    reporter.line(&format!(
        "Original size: {}",
        format_kb(outcome.original_bytes)
    ));
    reporter.line(&format!(
        "Optimized PNG size: {}",
        format_kb(outcome.candidate_bytes)
    ));

    if outcome.adopted {
        let candidate_name = outcome
            .candidate_path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        reporter.blank();
        reporter.line("Note: Created optimized PNG candidate. To use it:");
        reporter.line(&format!("1. Rename {candidate_name} to favicon.png"));
        reporter.line("2. Update the page metadata to reference the PNG favicon");
        reporter.line("3. Modern browsers support PNG favicons and they are smaller");
        if let Some(backup) = &outcome.backup_path {
            reporter.blank();
            reporter.line(&format!("Backup written to {}", backup.display()));
        }
        reporter.blank();
        reporter.line(&format!(
            "Potential savings: {:.1}%",
            outcome.savings_percent()
        ));
    } else {
        reporter.blank();
        reporter.line("Original favicon is already optimal. No changes needed.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::fs;

    fn write_png(path: &Path) {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, 50, 255])
        });
        DynamicImage::ImageRgba8(img)
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_run_images_over_temp_tree() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("one.png"));

        let cli = ImagesCli::parse_from([
            "optimize-images",
            "--root",
            dir.path().to_str().unwrap(),
            "-q",
        ]);
        let summary = run_images(&cli).unwrap();

        assert_eq!(summary.discovered, 1);
        assert_eq!(summary.optimized, 1);
        assert!(dir.path().join("one.webp").exists());
    }

    #[test]
    fn test_run_images_missing_root_is_not_an_error() {
        let cli = ImagesCli::parse_from(["optimize-images", "--root", "/no/such/dir", "-q"]);
        let summary = run_images(&cli).unwrap();
        assert_eq!(summary.discovered, 0);
    }

    #[test]
    fn test_run_favicon_missing_file_recovers() {
        let cli = FaviconCli::parse_from([
            "optimize-favicon",
            "--favicon",
            "/no/such/favicon.ico",
            "-q",
        ]);
        assert!(run_favicon(&cli).is_ok());
    }
}
