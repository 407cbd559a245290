//! Pixel indexing and the quantizer's output type.
//!
//! [`Indexer`] maps RGB pixels to palette slots with a per-call color
//! cache. [`Quantized`] pairs the resulting index buffer with the
//! [`Palette`](crate::palette::Palette) it refers to.

mod indexer;
mod quantized;

pub use indexer::{CacheStats, Indexer};
pub use quantized::Quantized;
