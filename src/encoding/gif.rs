//! Animated GIF output.
//!
//! Every frame carries its own local color table, since each frame is
//! quantized independently. The global color table is left empty.

use crate::error::EncodeError;
use crate::models::Disposal;
use gif::{DisposalMethod, Encoder, Frame, Repeat};
use neuquant::PALETTE_BYTES;
use std::io::Write;

/// One quantized frame ready for encoding.
#[derive(Debug, Clone)]
pub struct GifFrame {
    pub width: u16,
    pub height: u16,
    pub palette: [u8; PALETTE_BYTES],
    pub indices: Vec<u8>,
    /// Delay in hundredths of a second
    pub delay: u16,
    pub disposal: Disposal,
    pub transparent_index: Option<u8>,
}

/// Milliseconds to GIF centiseconds, truncating and saturating.
pub fn delay_centiseconds(delay_ms: u32) -> u16 {
    u16::try_from(delay_ms / 10).unwrap_or(u16::MAX)
}

impl From<Disposal> for DisposalMethod {
    fn from(disposal: Disposal) -> Self {
        match disposal {
            Disposal::Any => DisposalMethod::Any,
            Disposal::Keep => DisposalMethod::Keep,
            Disposal::Background => DisposalMethod::Background,
            Disposal::Previous => DisposalMethod::Previous,
        }
    }
}

/// Write an animated GIF. The canvas is the largest frame width and height;
/// frames are placed at the top-left corner.
///
/// `loop_count` 0 loops forever.
pub fn write_gif<W: Write>(
    output: W,
    loop_count: u16,
    frames: &[GifFrame],
) -> Result<W, EncodeError> {
    if frames.is_empty() {
        return Err(EncodeError::NoFrames);
    }
    let width = frames.iter().map(|f| f.width).max().unwrap_or(0);
    let height = frames.iter().map(|f| f.height).max().unwrap_or(0);

    let mut encoder = Encoder::new(output, width, height, &[])?;
    let repeat = match loop_count {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    };
    encoder.set_repeat(repeat)?;

    for frame in frames {
        let mut gif_frame = Frame::from_palette_pixels(
            frame.width,
            frame.height,
            frame.indices.as_slice(),
            frame.palette.as_slice(),
            frame.transparent_index,
        );
        gif_frame.delay = frame.delay;
        gif_frame.dispose = frame.disposal.into();
        encoder.write_frame(&gif_frame)?;
    }

    tracing::debug!(width, height, frames = frames.len(), "Wrote GIF");
    Ok(encoder.into_inner()?)
}
