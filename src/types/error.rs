//! Error types for the order compressor
//!
//! This module defines all error types that can occur while discovering,
//! aggregating and emitting a batch. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Source Access Errors**: File not found, permission denied, write failures
//! - **Record Errors**: Malformed rows (non-numeric fields, wrong field count)
//! - **Validation Errors**: Wrong header, invalid configuration
//! - **Runtime Errors**: Async runtime or worker failures

use thiserror::Error;

/// Main error type for the compressor
///
/// Every variant is fatal for at most one batch. A failing source never
/// affects the other sources of the same run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompressError {
    /// File or directory not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV reader or writer failed below the record level
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the error
        message: String,
    },

    /// A record could not be parsed into `customer_id, order_id, number_of_items`
    ///
    /// Whether this ends the batch, is skipped, or fails the batch depends on
    /// the configured `MalformedRecordPolicy`.
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number of the malformed record (if available)
        line: Option<u64>,
        /// Description of what was wrong
        message: String,
    },

    /// The source does not start with the expected header
    #[error("Invalid header in {path}: '{found}'")]
    InvalidHeader {
        /// The offending source
        path: String,
        /// The first line that was found instead
        found: String,
    },

    /// Configuration values were rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Why the configuration was rejected
        message: String,
    },

    /// The async runtime or one of its workers failed
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to CompressError
impl From<std::io::Error> for CompressError {
    fn from(error: std::io::Error) -> Self {
        CompressError::IoError {
            message: error.to_string(),
        }
    }
}

// Record-shaped csv failures are malformed records, everything else is a
// reader/writer failure
impl From<csv::Error> for CompressError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.kind() {
            csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Utf8 { .. } => CompressError::MalformedRecord {
                line,
                message: error.to_string(),
            },
            csv::ErrorKind::Io(_) => CompressError::IoError {
                message: error.to_string(),
            },
            _ => CompressError::ParseError {
                line,
                message: error.to_string(),
            },
        }
    }
}

impl From<csv_async::Error> for CompressError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.kind() {
            csv_async::ErrorKind::Deserialize { .. }
            | csv_async::ErrorKind::UnequalLengths { .. }
            | csv_async::ErrorKind::Utf8 { .. } => CompressError::MalformedRecord {
                line,
                message: error.to_string(),
            },
            csv_async::ErrorKind::Io(_) => CompressError::IoError {
                message: error.to_string(),
            },
            _ => CompressError::ParseError {
                line,
                message: error.to_string(),
            },
        }
    }
}

// Helper functions for creating common errors

impl CompressError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        CompressError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(line: Option<u64>, message: &str) -> Self {
        CompressError::MalformedRecord {
            line,
            message: message.to_string(),
        }
    }

    /// Create an InvalidHeader error
    pub fn invalid_header(path: &std::path::Path, found: &str) -> Self {
        CompressError::InvalidHeader {
            path: path.display().to_string(),
            found: found.trim_end().to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: &str) -> Self {
        CompressError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create a RuntimeError error
    pub fn runtime(message: &str) -> Self {
        CompressError::RuntimeError {
            message: message.to_string(),
        }
    }

    /// Attach a path to I/O failures, mapping missing files to `FileNotFound`
    pub fn from_io(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            CompressError::file_not_found(path)
        } else {
            CompressError::IoError {
                message: format!("{}: {}", path.display(), error),
            }
        }
    }

    /// Whether this error is about a single bad record rather than the source
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, CompressError::MalformedRecord { .. })
    }

    /// Line number attached to the error, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            CompressError::ParseError { line, .. }
            | CompressError::MalformedRecord { line, .. } => *line,
            _ => None,
        }
    }
}
