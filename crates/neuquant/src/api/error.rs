//! Unified error type for the neuquant public API.

use crate::composite::{CompositeError, ParseColorError};
use std::fmt;

/// Unified error type for the neuquant public API.
///
/// Every variant is a precondition violation detected before any work is
/// done, so an error never leaves partial results behind.
///
/// # Example
///
/// ```
/// use neuquant::{quantize, QuantizeError};
///
/// let err = quantize(&[1, 2, 3], 0).unwrap_err();
/// assert_eq!(err, QuantizeError::InvalidQuality { quality: 0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// Quality factor outside `1..=30`
    InvalidQuality {
        /// The rejected value
        quality: u8,
    },
    /// RGB buffer is empty or not a whole number of pixels
    InvalidBufferLength {
        /// Length of the rejected buffer in bytes
        len: usize,
    },
    /// RGBA input does not match the given dimensions
    Composite(CompositeError),
    /// Background color could not be parsed
    ParseColor(ParseColorError),
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::InvalidQuality { quality } => {
                write!(f, "quality must be between 1 and 30, got {}", quality)
            }
            QuantizeError::InvalidBufferLength { len } => write!(
                f,
                "RGB buffer length must be a positive multiple of 3, got {}",
                len
            ),
            QuantizeError::Composite(err) => write!(f, "composite error: {}", err),
            QuantizeError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Composite(err) => Some(err),
            QuantizeError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompositeError> for QuantizeError {
    fn from(err: CompositeError) -> Self {
        QuantizeError::Composite(err)
    }
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::ParseColor(err)
    }
}
