//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Optimization library error
    #[error("{0}")]
    Optimize(#[from] optimizar::OptimizeError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid-argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_error_passes_through_message() {
        let err: CliError = optimizar::OptimizeError::decode("truncated file").into();
        assert_eq!(err.to_string(), "Failed to decode image: truncated file");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::invalid_argument("bad path");
        assert_eq!(err.to_string(), "Invalid argument: bad path");
    }
}
