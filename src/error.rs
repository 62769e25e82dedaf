//! Unified error types for chatlens.
//!
//! Parsing and analysis never fail: unparseable lines are dropped and empty
//! inputs produce zero-valued results. Errors only come from the boundary:
//! reading input files, loading configuration, and writing reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Transcript;
///
/// fn load() -> Result<Transcript> {
///     Ok(chatlens::parse(""))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or stop-word file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Reading a file failed, with the offending path attached.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration value is malformed.
    ///
    /// Raised for timestamp patterns that chrono cannot interpret.
    #[error("Invalid {what}: {message}")]
    InvalidFormat {
        /// What was being configured (e.g. "timestamp format")
        what: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

impl ChatlensError {
    /// Creates a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(what: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            what,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_) | ChatlensError::Read { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_read_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = ChatlensError::read("/tmp/chat.txt", io_err);
        let display = err.to_string();
        assert!(display.contains("/tmp/chat.txt"));
        assert!(display.contains("missing"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("timestamp format", "unknown specifier %Q");
        let display = err.to_string();
        assert!(display.contains("timestamp format"));
        assert!(display.contains("%Q"));
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("output conversion"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err = ChatlensError::from(json_err);
        assert!(err.to_string().contains("JSON error"));
    }
}
