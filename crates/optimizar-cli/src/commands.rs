//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use optimizar::PipelineConfig;
use std::path::PathBuf;

/// Color output choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    /// Use colors when stdout is a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorArg {
    /// Resolve the choice against the actual terminal
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// optimize-images: recompress every image under the asset root
///
/// Walks the root recursively, re-encodes each `.png`/`.jpg`/`.jpeg`/
/// `.gif` in place at quality 80, and writes a `.webp` sibling for each.
#[derive(Parser, Debug)]
#[command(name = "optimize-images")]
#[command(version, about, long_about = None)]
pub struct ImagesCli {
    /// Asset root to scan for images
    #[arg(long, default_value = optimizar::DEFAULT_ASSET_ROOT)]
    pub root: PathBuf,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,
}

impl ImagesCli {
    /// Pipeline configuration implied by the arguments
    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::new().with_asset_root(&self.root)
    }
}

/// optimize-favicon: propose a smaller 32x32 PNG favicon
///
/// Never replaces the favicon itself; on a byte-size win it writes a
/// backup and a candidate PNG and prints the manual adoption steps.
#[derive(Parser, Debug)]
#[command(name = "optimize-favicon")]
#[command(version, about, long_about = None)]
pub struct FaviconCli {
    /// Favicon file to optimize
    #[arg(long, default_value = optimizar::DEFAULT_FAVICON_PATH)]
    pub favicon: PathBuf,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,
}

impl FaviconCli {
    /// Pipeline configuration implied by the arguments
    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig::new().with_favicon_path(&self.favicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_defaults_match_site_layout() {
        let cli = ImagesCli::parse_from(["optimize-images"]);
        assert_eq!(cli.root, PathBuf::from("public"));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_images_root_override() {
        let cli = ImagesCli::parse_from(["optimize-images", "--root", "/tmp/assets", "-q"]);
        assert_eq!(cli.root, PathBuf::from("/tmp/assets"));
        assert!(cli.quiet);
        assert_eq!(cli.config().asset_root, PathBuf::from("/tmp/assets"));
    }

    #[test]
    fn test_favicon_defaults() {
        let cli = FaviconCli::parse_from(["optimize-favicon"]);
        assert_eq!(cli.favicon, PathBuf::from("app/favicon.ico"));
    }

    #[test]
    fn test_color_arg_never() {
        let cli = FaviconCli::parse_from(["optimize-favicon", "--color", "never"]);
        assert!(!cli.color.should_color());
    }
}
