//! optimize-images: recompress every raster image under the asset root.

use clap::Parser;
use optimizador::{init_tracing, run_images, ImagesCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();
    let cli = ImagesCli::parse();
    match run_images(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
