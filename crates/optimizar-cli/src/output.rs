//! Console output and progress reporting

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use optimizar::TranscodeReport;
use std::path::Path;

/// Progress and report printer for the batch pipelines
///
/// Human-oriented free text: report lines go to stdout, the progress bar
/// and error lines to stderr so redirected output stays clean.
#[derive(Debug)]
pub struct ProgressReporter {
    term: Term,
    progress_bar: Option<ProgressBar>,
    use_color: bool,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            progress_bar: None,
            use_color,
            quiet,
        }
    }

    /// Print a plain line to stdout
    pub fn line(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a blank line to stdout
    pub fn blank(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Start a progress bar over `total` files
    pub fn start_progress(&mut self, total: u64) {
        if self.quiet || !self.term.is_term() {
            return;
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
    }

    /// Advance the progress bar by one file
    pub fn advance(&self, current: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(current.to_string());
            pb.inc(1);
        }
    }

    /// Remove the progress bar
    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Print the per-file size report
    pub fn file_report(&self, report: &TranscodeReport) {
        if self.quiet {
            return;
        }
        println!("  Original: {}", optimizar::format_kb(report.original_bytes));
        println!(
            "  Optimized: {}",
            optimizar::format_kb(report.optimized_bytes)
        );
        let savings = format!("{:.1}%", report.savings_percent());
        if self.use_color {
            println!("  Savings: {}", style(savings).green());
        } else {
            println!("  Savings: {savings}");
        }
        if let Some(webp) = report.webp_bytes {
            println!("  WebP: {}", optimizar::format_kb(webp));
        }
    }

    /// Print a per-file failure to stderr
    pub fn file_error(&self, path: &Path, message: &str) {
        let line = format!("  Error optimizing {}: {message}", path.display());
        if self.use_color {
            eprintln!("{}", style(line).red());
        } else {
            eprintln!("{line}");
        }
    }
}
