//! Error types for calmread operations.
//!
//! Only the I/O edges of the crate (fetching, reading files) can fail. The
//! text analyzers never return errors: degenerate input produces an empty or
//! neutral result instead.
//!
//! # Example
//!
//! ```rust
//! use calmread_core::{CalmreadError, Result};
//!
//! fn require_html(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(CalmreadError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for calmread operations.
#[derive(Error, Debug)]
pub enum CalmreadError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP request returned status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML could not be processed, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Wraps standard I/O errors for file and stdin operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failures.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for CalmreadError.
pub type Result<T> = std::result::Result<T, CalmreadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalmreadError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_status_error() {
        let err = CalmreadError::HttpStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_timeout_error() {
        let err = CalmreadError::Timeout { timeout: 12 };
        assert!(err.to_string().contains("12"));
    }
}
