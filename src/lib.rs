//! Screencast GIF: animated GIFs from PNG frame sequences.
//!
//! Each frame is decoded, flattened against a background color and reduced
//! to its own 256-color palette with the `neuquant` engine, then written as
//! one frame of an animated GIF.

pub mod encoding;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, EncodeError, FrameError};
pub use models::{ConfigOverrides, Disposal, EncodeConfig, ResolvedFrame};
pub use services::{GifPipeline, LoadedFrame};
