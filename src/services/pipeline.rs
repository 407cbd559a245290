use crate::encoding::{delay_centiseconds, encode_indexed_png, write_gif, GifFrame};
use crate::error::{EncodeError, FrameError};
use crate::models::{EncodeConfig, ResolvedFrame};
use crate::services::frame_loader::{load_png, LoadedFrame};
use neuquant::{Background, Quantized, Quantizer};
use rayon::prelude::*;
use std::path::Path;

/// Turns PNG frames into an animated GIF.
///
/// Frames are decoded and quantized in parallel, then written in input
/// order.
#[derive(Debug, Clone)]
pub struct GifPipeline {
    quantizer: Quantizer,
    loop_count: u16,
}

/// What an encode run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSummary {
    pub frames: usize,
    pub width: u16,
    pub height: u16,
    pub bytes: usize,
}

impl GifPipeline {
    pub fn new(quantizer: Quantizer, loop_count: u16) -> Self {
        Self {
            quantizer,
            loop_count,
        }
    }

    /// Build a pipeline from the quality, background and loop count of a
    /// config.
    pub fn from_config(config: &EncodeConfig) -> Result<Self, EncodeError> {
        let background: Background = config.background.parse()?;
        let quantizer = Quantizer::new()
            .quality(config.quality)
            .background(background);
        Ok(Self::new(quantizer, config.loop_count))
    }

    /// Encode resolved frames into GIF bytes.
    pub fn encode(&self, frames: &[ResolvedFrame]) -> Result<Vec<u8>, EncodeError> {
        let gif_frames = self.prepare_frames(frames)?;
        write_gif(Vec::new(), self.loop_count, &gif_frames)
    }

    /// Encode and write to `output`.
    pub fn encode_to_file(
        &self,
        frames: &[ResolvedFrame],
        output: &Path,
    ) -> Result<EncodeSummary, EncodeError> {
        let gif_frames = self.prepare_frames(frames)?;
        let bytes = write_gif(Vec::new(), self.loop_count, &gif_frames)?;
        std::fs::write(output, &bytes)?;

        let summary = EncodeSummary {
            frames: gif_frames.len(),
            width: gif_frames.iter().map(|f| f.width).max().unwrap_or(0),
            height: gif_frames.iter().map(|f| f.height).max().unwrap_or(0),
            bytes: bytes.len(),
        };
        tracing::info!(
            output = %output.display(),
            frames = summary.frames,
            width = summary.width,
            height = summary.height,
            bytes = summary.bytes,
            "Wrote GIF"
        );
        Ok(summary)
    }

    fn prepare_frames(&self, frames: &[ResolvedFrame]) -> Result<Vec<GifFrame>, EncodeError> {
        if frames.is_empty() {
            return Err(EncodeError::NoFrames);
        }
        tracing::info!(frames = frames.len(), "Quantizing frames");

        frames
            .par_iter()
            .enumerate()
            .map(|(index, frame)| {
                self.prepare_frame(frame).map_err(|source| EncodeError::Frame {
                    index,
                    path: frame.path.display().to_string(),
                    source,
                })
            })
            .collect()
    }

    fn prepare_frame(&self, frame: &ResolvedFrame) -> Result<GifFrame, FrameError> {
        let loaded = load_png(&frame.path)?;
        let (width, height) = gif_dimensions(&loaded)?;
        let quantized = quantize_frame(&self.quantizer, &loaded)?;
        tracing::debug!(path = %frame.path.display(), width, height, "Quantized frame");

        let palette = quantized.palette_bytes();
        let (_, indices) = quantized.into_parts();
        Ok(GifFrame {
            width,
            height,
            palette,
            indices,
            delay: delay_centiseconds(frame.delay_ms),
            disposal: frame.disposal,
            transparent_index: frame.transparent_index,
        })
    }
}

/// Composite and quantize one decoded frame.
pub fn quantize_frame(
    quantizer: &Quantizer,
    frame: &LoadedFrame,
) -> Result<Quantized, FrameError> {
    let quantized =
        quantizer.quantize_rgba(&frame.rgba, frame.width as usize, frame.height as usize)?;
    Ok(quantized)
}

fn gif_dimensions(frame: &LoadedFrame) -> Result<(u16, u16), FrameError> {
    match (u16::try_from(frame.width), u16::try_from(frame.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(FrameError::TooLarge {
            width: frame.width,
            height: frame.height,
        }),
    }
}

/// Reduce a single PNG to an indexed 8-bit PNG.
pub fn quantize_png(
    quantizer: &Quantizer,
    input: &Path,
    output: &Path,
) -> Result<(), EncodeError> {
    let loaded = load_png(input).map_err(|source| EncodeError::Frame {
        index: 0,
        path: input.display().to_string(),
        source,
    })?;
    let quantized = quantize_frame(quantizer, &loaded).map_err(|source| EncodeError::Frame {
        index: 0,
        path: input.display().to_string(),
        source,
    })?;

    let bytes = encode_indexed_png(loaded.width, loaded.height, &quantized)?;
    std::fs::write(output, &bytes)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bytes = bytes.len(),
        "Wrote indexed PNG"
    );
    Ok(())
}
