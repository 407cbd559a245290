//! Alpha compositing of straight-alpha RGBA against an opaque background.
//!
//! The quantizer only understands opaque colors, so decoded frames are
//! flattened first: every pixel is blended with a [`Background`] according
//! to its alpha, producing packed 3-byte RGB.

mod background;
mod error;

pub use background::Background;
pub use error::{CompositeError, ParseColorError};

/// Blend an RGBA buffer against `background`, returning packed RGB.
///
/// Fully transparent pixels become the background exactly, fully opaque
/// pixels keep their color. Everything in between is blended per channel as
/// `round(src * a + bg * (1 - a))` with `a = alpha / 255`.
///
/// # Errors
///
/// Returns [`CompositeError::LengthMismatch`] if `rgba.len()` is not
/// `width * height * 4`.
///
/// # Example
///
/// ```
/// use neuquant::{composite_alpha, Background};
///
/// let rgba = [10, 20, 30, 0, 1, 2, 3, 255];
/// let rgb = composite_alpha(&rgba, 2, 1, Background::WHITE).unwrap();
/// assert_eq!(rgb, vec![255, 255, 255, 1, 2, 3]);
/// ```
pub fn composite_alpha(
    rgba: &[u8],
    width: usize,
    height: usize,
    background: Background,
) -> Result<Vec<u8>, CompositeError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CompositeError::DimensionsOverflow { width, height })?;
    if rgba.len() != expected {
        return Err(CompositeError::LengthMismatch {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    let bg = background.to_bytes();
    let mut rgb = Vec::with_capacity(width * height * 3);
    for px in rgba.chunks_exact(4) {
        match px[3] {
            0 => rgb.extend_from_slice(&bg),
            255 => rgb.extend_from_slice(&px[..3]),
            alpha => {
                let a = alpha as f64 / 255.0;
                for (&src, &back) in px[..3].iter().zip(bg.iter()) {
                    rgb.push(blend(src, back, a));
                }
            }
        }
    }
    Ok(rgb)
}

#[inline]
fn blend(src: u8, back: u8, a: f64) -> u8 {
    (src as f64 * a + back as f64 * (1.0 - a)).round() as u8
}
