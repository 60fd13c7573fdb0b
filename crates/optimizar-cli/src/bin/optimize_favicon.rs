//! optimize-favicon: propose a smaller 32x32 PNG favicon, never adopt it.

use clap::Parser;
use optimizador::{init_tracing, run_favicon, FaviconCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();
    let cli = FaviconCli::parse();
    match run_favicon(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
