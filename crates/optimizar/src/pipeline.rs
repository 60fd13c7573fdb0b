//! Sequential driver: scan, then transcode one file at a time.

use crate::config::PipelineConfig;
use crate::report::TranscodeReport;
use crate::result::{OptimizeError, OptimizeResult};
use crate::scanner::scan_images;
use crate::transcode::optimize_file;
use std::path::PathBuf;
use tracing::debug;

/// What happened to one discovered file
///
/// Per-file failures are values, not exceptions: the driver records them
/// and moves on. No current failure kind escalates, and the tests treat
/// that as a contract.
#[derive(Debug)]
pub struct FileOutcome {
    /// The file the scanner handed to the transcoder
    pub path: PathBuf,
    /// Report on success, the per-file error otherwise
    pub result: Result<TranscodeReport, OptimizeError>,
}

/// Aggregate counts for one run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files the scanner discovered
    pub discovered: usize,
    /// Files optimized and committed
    pub optimized: usize,
    /// Files skipped because of a per-file failure
    pub failed: usize,
    /// Per-file outcomes in processing order
    pub outcomes: Vec<FileOutcome>,
}

/// Progress notifications emitted while the driver runs
///
/// Lets a caller stream per-file reporting without the library printing
/// anything itself.
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    /// Scan finished; this many files are about to be processed
    Discovered {
        /// Number of files the scanner found
        count: usize,
    },
    /// One file was fully processed (transcode, replace, derivative)
    Completed(&'a FileOutcome),
}

/// Run the image pipeline over the configured asset root
///
/// # Errors
///
/// Only a root that exists but cannot be listed is a run-level error;
/// everything per-file is captured in the summary.
pub fn run(config: &PipelineConfig) -> OptimizeResult<RunSummary> {
    run_with(config, |_| {})
}

/// Run the pipeline, invoking `observe` as the run progresses
///
/// Each file is fully processed before the next one starts, and its
/// [`PipelineEvent::Completed`] fires before the next file is touched.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<F>(config: &PipelineConfig, mut observe: F) -> OptimizeResult<RunSummary>
where
    F: FnMut(PipelineEvent<'_>),
{
    let files = scan_images(&config.asset_root)?;
    observe(PipelineEvent::Discovered { count: files.len() });

    let mut summary = RunSummary {
        discovered: files.len(),
        ..RunSummary::default()
    };

    for path in files {
        debug!(path = %path.display(), "optimizing");
        let outcome = FileOutcome {
            result: optimize_file(&path),
            path,
        };
        match &outcome.result {
            Ok(_) => summary.optimized += 1,
            Err(_) => summary.failed += 1,
        }
        observe(PipelineEvent::Completed(&outcome));
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;

    fn write_png(path: &Path) {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, 99, 255])
        });
        DynamicImage::ImageRgba8(img)
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_missing_root_completes_with_empty_summary() {
        let config = PipelineConfig::new().with_asset_root("/no/such/tree");
        let summary = run(&config).unwrap();
        assert_eq!(summary.discovered, 0);
        assert_eq!(summary.optimized, 0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_mixed_tree_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        write_png(&dir.path().join("good.png"));
        fs::write(dir.path().join("nested/bad.png"), b"garbage").unwrap();

        let config = PipelineConfig::new().with_asset_root(dir.path());
        let summary = run(&config).unwrap();

        assert_eq!(summary.discovered, 2);
        assert_eq!(summary.optimized, 1);
        assert_eq!(summary.failed, 1);
        // The good file got its derivative despite the bad sibling
        assert!(dir.path().join("good.webp").exists());
        assert!(!dir.path().join("nested/bad.webp").exists());
    }

    #[test]
    fn test_observer_sees_discovery_then_every_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a.png"));
        write_png(&dir.path().join("b.png"));

        let config = PipelineConfig::new().with_asset_root(dir.path());
        let mut discovered = None;
        let mut seen = Vec::new();
        let summary = run_with(&config, |event| match event {
            PipelineEvent::Discovered { count } => discovered = Some(count),
            PipelineEvent::Completed(outcome) => seen.push(outcome.path.clone()),
        })
        .unwrap();

        assert_eq!(discovered, Some(2));
        assert_eq!(seen.len(), 2);
        let recorded: Vec<_> = summary.outcomes.iter().map(|o| o.path.clone()).collect();
        assert_eq!(seen, recorded);
    }

    #[test]
    fn test_rerun_is_safe() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("img.png"));
        let config = PipelineConfig::new().with_asset_root(dir.path());

        let first = run(&config).unwrap();
        let second = run(&config).unwrap();

        assert_eq!(first.optimized, 1);
        assert_eq!(second.optimized, 1);
        let size_first = first.outcomes[0].result.as_ref().unwrap().optimized_bytes;
        let size_second = second.outcomes[0].result.as_ref().unwrap().optimized_bytes;
        assert!(size_second <= size_first);
    }
}
