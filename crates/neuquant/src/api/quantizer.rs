//! Quantizer builder -- the primary entry point for the crate.
//!
//! [`Quantizer`] wires the pipeline together: optional alpha compositing,
//! network training, palette building and indexing.

use super::error::QuantizeError;
use crate::composite::{composite_alpha, Background};
use crate::network::{SamplingPlan, Trainer, QUALITY_RANGE};
use crate::output::{Indexer, Quantized};
use crate::palette::build_palette;

/// Sampling factor used when none is configured.
pub const DEFAULT_QUALITY: u8 = 10;

/// Quantize packed RGB with the given quality factor.
///
/// Shorthand for `Quantizer::new().quality(quality).quantize(rgb)`.
///
/// # Errors
///
/// - [`QuantizeError::InvalidQuality`] if `quality` is outside `1..=30`
/// - [`QuantizeError::InvalidBufferLength`] if `rgb` is empty or its length
///   is not a multiple of 3
pub fn quantize(rgb: &[u8], quality: u8) -> Result<Quantized, QuantizeError> {
    Quantizer::new().quality(quality).quantize(rgb)
}

/// Builder for quantization runs.
///
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   shared across frames and threads
///
/// # Example
///
/// ```
/// use neuquant::{Background, Quantizer};
///
/// let quantizer = Quantizer::new()
///     .quality(1)
///     .background(Background::BLACK);
///
/// // One opaque red pixel, one fully transparent pixel.
/// let rgba = [255, 0, 0, 255, 9, 9, 9, 0];
/// let result = quantizer.quantize_rgba(&rgba, 2, 1).unwrap();
///
/// assert_eq!(result.indices().len(), 2);
/// assert_eq!(result.palette_bytes().len(), 768);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    quality: u8,
    background: Background,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Quantizer {
    /// Quality 10, white background.
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            background: Background::WHITE,
        }
    }

    /// Set the sampling factor. 1 samples every pixel, 30 every 30th.
    ///
    /// Validated when quantizing.
    #[inline]
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Set the background used by [`quantize_rgba()`](Self::quantize_rgba).
    #[inline]
    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Quantize packed RGB (3 bytes per pixel).
    pub fn quantize(&self, rgb: &[u8]) -> Result<Quantized, QuantizeError> {
        if !QUALITY_RANGE.contains(&self.quality) {
            return Err(QuantizeError::InvalidQuality {
                quality: self.quality,
            });
        }
        if rgb.is_empty() || rgb.len() % 3 != 0 {
            return Err(QuantizeError::InvalidBufferLength { len: rgb.len() });
        }

        let plan = SamplingPlan::new(rgb.len(), self.quality);
        let network = Trainer::new().train(rgb, &plan);
        let palette = build_palette(network);
        let (indices, stats) = Indexer::new(&palette).index_with_stats(rgb);

        tracing::debug!(
            pixels = indices.len(),
            distinct_colors = stats.misses,
            "Quantized buffer"
        );

        Ok(Quantized::new(palette, indices))
    }

    /// Composite straight-alpha RGBA against the background, then quantize.
    pub fn quantize_rgba(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Quantized, QuantizeError> {
        let rgb = composite_alpha(rgba, width, height, self.background)?;
        self.quantize(&rgb)
    }
}
