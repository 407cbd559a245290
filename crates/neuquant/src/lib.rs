//! neuquant: neural-net color quantization for indexed-color images
//!
//! This library reduces a true-color pixel buffer to a 256-entry palette and
//! one palette index per pixel, using Anthony Dekker's NeuQuant algorithm: a
//! one-dimensional Kohonen self-organizing map trained online on a
//! deterministic sample of the image.
//!
//! # Quick Start
//!
//! ```
//! use neuquant::quantize;
//!
//! // A 2x2 image: red, green, blue, white.
//! let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
//! let result = quantize(&rgb, 10).unwrap();
//!
//! assert_eq!(result.palette_bytes().len(), 768);
//! assert_eq!(result.indices().len(), 4);
//! ```
//!
//! Decoded images usually carry alpha. [`Quantizer::quantize_rgba`]
//! flattens straight-alpha RGBA against a [`Background`] first:
//!
//! ```
//! use neuquant::{Background, Quantizer};
//!
//! let rgba = [10, 20, 30, 0];
//! let result = Quantizer::new()
//!     .background(Background::WHITE)
//!     .quantize_rgba(&rgba, 1, 1)
//!     .unwrap();
//! assert_eq!(result.to_rgb(), vec![255, 255, 255]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA --composite_alpha--> RGB
//!                            |
//!                            +--> Trainer (256 neurons, fixed sample budget)
//!                            |        |
//!                            |    build_palette (unbias, sort by green, buckets)
//!                            |        |
//!                            +--> Indexer (nearest entry, per-call cache)
//!                                     |
//!                              Quantized { palette, indices }
//! ```
//!
//! # Determinism
//!
//! Training visits pixels with a fixed prime stride instead of random
//! sampling and runs a fixed number of contests. The same input and quality
//! always give byte-identical output. A single run cannot be parallelized
//! without changing results, but separate frames are independent:
//! [`Quantizer`] is `Send + Sync` and `quantize` takes `&self`.
//!
//! # Fixed-point layout
//!
//! | quantity | representation |
//! |----------|----------------|
//! | neuron channel | color << 4 |
//! | frequency, bias | 1.0 = 1 << 16 |
//! | alpha (learning rate) | 1.0 = 1 << 10 |
//! | radius | slots << 6 |
//! | neighborhood weight | alpha << 8 at distance 0 |

#![allow(clippy::module_inception)]

pub mod api;
pub mod composite;
pub mod network;
pub mod output;
pub mod palette;


pub use api::{quantize, QuantizeError, Quantizer, DEFAULT_QUALITY};
pub use composite::{composite_alpha, Background, CompositeError, ParseColorError};
pub use network::{Network, SamplingPlan, Trainer};
pub use output::{CacheStats, Indexer, Quantized};
pub use palette::{build_palette, Palette, PALETTE_BYTES};
