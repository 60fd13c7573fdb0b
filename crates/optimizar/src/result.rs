//! Result and error types for the optimization pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for optimization operations
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur while optimizing assets
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Image could not be decoded
    #[error("Failed to decode image: {message}")]
    Decode {
        /// Error message
        message: String,
    },

    /// Image could not be encoded
    #[error("Failed to encode image: {message}")]
    Encode {
        /// Error message
        message: String,
    },

    /// File extension is not in the supported allowlist
    ///
    /// The scanner filters to supported extensions, so hitting this from
    /// the transcoder indicates a caller bypassed the scanner.
    #[error("Unsupported image extension: {}", .path.display())]
    UnsupportedExtension {
        /// Path with the offending extension
        path: PathBuf,
    },

    /// Asset root exists but could not be read
    #[error("Failed to read asset root {}: {message}", .root.display())]
    UnreadableRoot {
        /// The configured asset root
        root: PathBuf,
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OptimizeError {
    /// Create a decode error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an encode error
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}
