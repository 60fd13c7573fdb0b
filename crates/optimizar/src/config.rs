//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default asset root, relative to the invocation directory
pub const DEFAULT_ASSET_ROOT: &str = "public";

/// Default favicon location, relative to the invocation directory
pub const DEFAULT_FAVICON_PATH: &str = "app/favicon.ico";

/// Configuration for the asset optimization pipelines
///
/// Quality and favicon dimensions are deliberately not configurable; both
/// pipelines run at fixed settings and only the target paths vary (so the
/// core can run against a temporary directory in tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory tree scanned for images to optimize
    pub asset_root: PathBuf,
    /// The favicon file the candidate generator reads
    pub favicon_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            favicon_path: PathBuf::from(DEFAULT_FAVICON_PATH),
        }
    }
}

impl PipelineConfig {
    /// Create a config with the default locations
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset root
    #[must_use]
    pub fn with_asset_root(mut self, root: impl AsRef<Path>) -> Self {
        self.asset_root = root.as_ref().to_path_buf();
        self
    }

    /// Set the favicon path
    #[must_use]
    pub fn with_favicon_path(mut self, path: impl AsRef<Path>) -> Self {
        self.favicon_path = path.as_ref().to_path_buf();
        self
    }
}
