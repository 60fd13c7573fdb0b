//! Optimizador: command-line front end for the asset optimization library.
//!
//! Ships two flagless-by-default binaries: `optimize-images` walks the
//! asset root and recompresses every raster image in place, and
//! `optimize-favicon` proposes (never adopts) a smaller 32x32 PNG
//! favicon. Both default to the site's conventional locations and take
//! paths only so they can run against scratch directories.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod commands;
mod error;
mod output;
mod runner;

pub use commands::{ColorArg, FaviconCli, ImagesCli};
pub use error::{CliError, CliResult};
pub use output::ProgressReporter;
pub use runner::{run_favicon, run_images};

/// Initialize tracing from `RUST_LOG`, silent by default
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
