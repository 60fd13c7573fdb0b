//! Size accounting for optimized assets.

use serde::{Deserialize, Serialize};

/// Byte sizes recorded for one transcoded file
///
/// Computed once per file and handed to the caller for display; nothing
/// is retained after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeReport {
    /// Size of the file before optimization
    pub original_bytes: u64,
    /// Size of the in-place optimized file
    pub optimized_bytes: u64,
    /// Size of the WebP derivative, if one was written
    pub webp_bytes: Option<u64>,
}

impl TranscodeReport {
    /// Percentage saved by the in-place optimization
    ///
    /// Positive when the file shrank, negative when the re-encode grew
    /// it. A zero-byte original reports 0.0 rather than dividing by zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let original = self.original_bytes as f64;
        let optimized = self.optimized_bytes as f64;
        (original - optimized) / original * 100.0
    }
}

/// Convert a byte count to kilobytes
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Render a byte count as `"12.3KB"`, one decimal place
#[must_use]
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", kilobytes(bytes))
}
