//! Error types for graph-display operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting a graph.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Panel too small to hold the padded plot area.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// A point coordinate was NaN or infinite.
    #[error("Non-finite coordinate at point {index}")]
    NonFiniteValue {
        /// Index of the offending point.
        index: usize,
    },

    /// Point data ended in the middle of an (x, y) record.
    #[error("Truncated point data: {len} bytes is not a multiple of 16")]
    TruncatedRecord {
        /// Total number of bytes read.
        len: usize,
    },

    /// Font data could not be parsed.
    #[error("Font error: {0}")]
    Font(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_truncated_record() {
        let err = Error::TruncatedRecord { len: 20 };
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
