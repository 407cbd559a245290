//! Error types for background parsing and alpha compositing.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex background colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after the prefix)
    InvalidLength,
    /// Input contains non-ASCII characters
    NotAscii,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::NotAscii => write!(f, "hex color contains non-ASCII characters"),
            ParseColorError::InvalidHex(err) => write!(f, "invalid hex character: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for alpha compositing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    /// RGBA buffer length does not match `width * height * 4`
    LengthMismatch {
        width: usize,
        height: usize,
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`
    DimensionsOverflow { width: usize, height: usize },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeError::LengthMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "RGBA buffer for {}x{} must be {} bytes, got {}",
                width, height, expected, actual
            ),
            CompositeError::DimensionsOverflow { width, height } => {
                write!(f, "image dimensions {}x{} overflow", width, height)
            }
        }
    }
}

impl std::error::Error for CompositeError {}
