//! The result of quantizing one RGB buffer.

use crate::palette::{Palette, PALETTE_BYTES};

/// A 256-color palette plus one palette index per input pixel.
///
/// This is what an indexed-color encoder consumes: the palette bytes go
/// into the color table, the indices into the image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantized {
    palette: Palette,
    indices: Vec<u8>,
}

impl Quantized {
    pub fn new(palette: Palette, indices: Vec<u8>) -> Self {
        Self { palette, indices }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette indices, one per pixel, in input order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Palette as 768 bytes of RGB triples.
    pub fn palette_bytes(&self) -> [u8; PALETTE_BYTES] {
        self.palette.to_bytes()
    }

    /// Reconstruct packed RGB from the palette and indices.
    ///
    /// The returned buffer has length `indices().len() * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize));
        }
        rgb
    }

    pub fn into_parts(self) -> (Palette, Vec<u8>) {
        (self.palette, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone_palette() -> Palette {
        let mut colors = [[0u8; 3]; 256];
        colors[0] = [200, 50, 50];
        Palette::from_colors(&colors)
    }

    #[test]
    fn test_to_rgb_layout() {
        let palette = two_tone_palette();
        let muddy = palette.find_nearest(200, 50, 50);
        let image = Quantized::new(palette, vec![muddy, 0]);

        let rgb = image.to_rgb();
        assert_eq!(rgb.len(), 6);
        assert_eq!(&rgb[..3], &[200, 50, 50]);
        assert_eq!(&rgb[3..], &[0, 0, 0]);
    }

    #[test]
    fn test_palette_bytes_len() {
        let image = Quantized::new(two_tone_palette(), vec![]);
        assert_eq!(image.palette_bytes().len(), 768);
        assert!(image.to_rgb().is_empty());
    }
}
