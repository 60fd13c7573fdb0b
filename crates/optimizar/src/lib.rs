//! Optimizar: build-time optimization for a site's static image assets.
//!
//! Optimizar (Spanish: "to optimize") recompresses every raster image under
//! an asset root in place, emits a lossy WebP derivative next to each one,
//! and reports the byte savings. A second, single-shot pipeline proposes a
//! smaller 32x32 PNG replacement for the site favicon without ever adopting
//! it automatically.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌──────────┐   ┌──────────┐
//! │ Scanner  │──►│ Transcoder │──►│ Atomic   │──►│ Report   │
//! │ (walk)   │   │ (q=80)     │   │ Replacer │   │ (KB, %)  │
//! └──────────┘   └────────────┘   └──────────┘   └──────────┘
//!       one file at a time, strictly sequential
//! ```
//!
//! Processing is deliberately sequential blocking I/O: this is an offline
//! build step over a small asset tree, and per-file failures are recorded
//! and skipped rather than aborting the run.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod favicon;
mod pipeline;
mod replace;
mod report;
mod result;
mod scanner;
mod transcode;

pub use config::{PipelineConfig, DEFAULT_ASSET_ROOT, DEFAULT_FAVICON_PATH};
pub use favicon::{generate_favicon_candidate, FaviconOutcome, FAVICON_SIZE};
pub use pipeline::{run, run_with, FileOutcome, PipelineEvent, RunSummary};
pub use replace::write_atomic;
pub use report::{format_kb, kilobytes, TranscodeReport};
pub use result::{OptimizeError, OptimizeResult};
pub use scanner::{scan_images, AssetFile, ImageKind};
pub use transcode::{optimize_file, webp_sibling_path, QUALITY};
