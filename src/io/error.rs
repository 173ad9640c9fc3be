// src/io/error.rs

use thiserror::Error;

/// Parse failures are fatal for the file that raised them: no partial
/// volume is ever returned. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum CubeError {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("cube header ended early: {details} (line {line})")]
    TruncatedHeader { line: usize, details: String },

    #[error("invalid cube dimensions: {details} (line {line})")]
    InvalidDimensions { line: usize, details: String },

    #[error("scalar field holds {found} values, expected {expected}")]
    GridSizeMismatch { expected: usize, found: usize },

    #[error("malformed numeric token '{token}' (line {line})")]
    MalformedNumber { line: usize, token: String },
}

impl CubeError {
    pub(crate) fn truncated(line: usize, details: impl Into<String>) -> Self {
        Self::TruncatedHeader {
            line,
            details: details.into(),
        }
    }

    pub(crate) fn dimensions(line: usize, details: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            line,
            details: details.into(),
        }
    }

    pub(crate) fn number(line: usize, token: &str) -> Self {
        Self::MalformedNumber {
            line,
            token: token.to_string(),
        }
    }
}
