//! Public API for the neuquant crate.
//!
//! This module provides the high-level entry points: the [`Quantizer`]
//! builder, the one-shot [`quantize`] function and the unified
//! [`QuantizeError`] type.

mod error;
mod quantizer;

pub use error::QuantizeError;
pub use quantizer::{quantize, Quantizer, DEFAULT_QUALITY};
