//! The immutable 256-entry palette and nearest-color search.

use super::builder::sort_by_green;
use crate::network::{Neuron, NET_SIZE};

/// Size of the serialized palette in bytes (256 RGB triples).
pub const PALETTE_BYTES: usize = NET_SIZE * 3;

/// A trained palette of 256 RGB colors sorted by ascending green.
///
/// Alongside the colors the palette keeps a bucket index keyed by green
/// value, which lets [`Palette::find_nearest`] start its search next to the
/// right green band and stop as soon as the green difference alone exceeds
/// the best distance found.
///
/// # Example
///
/// ```
/// use neuquant::Palette;
///
/// let mut colors = [[0u8; 3]; 256];
/// colors[1] = [255, 0, 0];
/// colors[2] = [0, 255, 0];
/// let palette = Palette::from_colors(&colors);
///
/// // Green sorts last, red stays among the zero-green entries.
/// assert_eq!(palette.color(255), [0, 255, 0]);
/// assert_eq!(palette.color(1), [255, 0, 0]);
/// assert_eq!(palette.find_nearest(250, 10, 10), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; NET_SIZE],
    bucket: [u8; NET_SIZE],
}

impl Palette {
    pub(crate) fn from_parts(neurons: [Neuron; NET_SIZE], bucket: [u8; NET_SIZE]) -> Self {
        let mut colors = [[0u8; 3]; NET_SIZE];
        for (color, n) in colors.iter_mut().zip(neurons.iter()) {
            *color = [
                (n.r & 0xff) as u8,
                (n.g & 0xff) as u8,
                (n.b & 0xff) as u8,
            ];
        }
        Self { colors, bucket }
    }

    /// Build a palette from arbitrary colors, sorting them by green the same
    /// way a trained network is sorted.
    pub fn from_colors(colors: &[[u8; 3]; NET_SIZE]) -> Self {
        let mut neurons = [Neuron::default(); NET_SIZE];
        for (i, (n, c)) in neurons.iter_mut().zip(colors.iter()).enumerate() {
            *n = Neuron {
                r: c[0] as i32,
                g: c[1] as i32,
                b: c[2] as i32,
                index: i as u8,
            };
        }
        let bucket = sort_by_green(&mut neurons);
        Self::from_parts(neurons, bucket)
    }

    /// Number of entries. Always 256.
    #[inline]
    pub fn len(&self) -> usize {
        NET_SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// RGB bytes of entry `index`.
    #[inline]
    pub fn color(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    pub fn colors(&self) -> &[[u8; 3]; NET_SIZE] {
        &self.colors
    }

    /// Flat `R, G, B, R, G, B, ...` bytes in palette order.
    pub fn to_bytes(&self) -> [u8; PALETTE_BYTES] {
        let mut out = [0u8; PALETTE_BYTES];
        for (chunk, color) in out.chunks_exact_mut(3).zip(self.colors.iter()) {
            chunk.copy_from_slice(color);
        }
        out
    }

    /// Colors packed as `0xRRGGBB`.
    pub fn to_packed(&self) -> [u32; NET_SIZE] {
        let mut out = [0u32; NET_SIZE];
        for (p, &[r, g, b]) in out.iter_mut().zip(self.colors.iter()) {
            *p = (r as u32) << 16 | (g as u32) << 8 | b as u32;
        }
        out
    }

    /// Slot where the search for a color with green value `g` begins.
    #[inline]
    pub fn bucket_start(&self, g: u8) -> usize {
        self.bucket[g as usize] as usize
    }

    /// Index of the entry closest to `(r, g, b)` by squared Euclidean
    /// distance. On ties the lowest index wins.
    pub fn find_nearest(&self, r: u8, g: u8, b: u8) -> u8 {
        let start = self.bucket_start(g);
        let mut best_d = i32::MAX;
        let mut best_i = start;

        let consider = |i: usize, best_d: &mut i32, best_i: &mut usize| {
            let d = distance_sq(self.colors[i], r, g, b);
            if d < *best_d || (d == *best_d && i < *best_i) {
                *best_d = d;
                *best_i = i;
            }
        };

        // Upwards from the bucket start; green never decreases here.
        for i in start..NET_SIZE {
            let dg = self.colors[i][1] as i32 - g as i32;
            if dg >= 0 && dg * dg > best_d {
                break;
            }
            consider(i, &mut best_d, &mut best_i);
        }
        // Downwards; green never increases here.
        for i in (0..start).rev() {
            let dg = g as i32 - self.colors[i][1] as i32;
            if dg >= 0 && dg * dg > best_d {
                break;
            }
            consider(i, &mut best_d, &mut best_i);
        }

        best_i as u8
    }

    /// Reference full scan. Same result as [`Palette::find_nearest`].
    pub fn find_nearest_linear(&self, r: u8, g: u8, b: u8) -> u8 {
        let mut best_d = i32::MAX;
        let mut best_i = 0;
        for (i, &c) in self.colors.iter().enumerate() {
            let d = distance_sq(c, r, g, b);
            if d < best_d {
                best_d = d;
                best_i = i;
            }
        }
        best_i as u8
    }
}

#[inline]
fn distance_sq(c: [u8; 3], r: u8, g: u8, b: u8) -> i32 {
    let dr = c[0] as i32 - r as i32;
    let dg = c[1] as i32 - g as i32;
    let db = c[2] as i32 - b as i32;
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A palette with a deliberately uneven green distribution.
    fn lumpy_palette() -> Palette {
        let mut colors = [[0u8; 3]; NET_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let i = i as u32;
            *c = [
                (i * 97 % 256) as u8,
                ((i * i) % 61 * 4) as u8,
                (i * 13 % 256) as u8,
            ];
        }
        Palette::from_colors(&colors)
    }

    #[test]
    fn test_to_bytes_is_768_in_palette_order() {
        let palette = lumpy_palette();
        let bytes = palette.to_bytes();
        assert_eq!(bytes.len(), 768);
        for i in 0..NET_SIZE {
            assert_eq!(&bytes[i * 3..i * 3 + 3], &palette.color(i));
        }
    }

    #[test]
    fn test_colors_sorted_by_green() {
        let palette = lumpy_palette();
        assert!(palette.colors().windows(2).all(|w| w[0][1] <= w[1][1]));
    }

    #[test]
    fn test_to_packed() {
        let mut colors = [[0u8; 3]; NET_SIZE];
        colors[0] = [0x12, 0x00, 0x56];
        let palette = Palette::from_colors(&colors);
        assert_eq!(palette.to_packed()[0], 0x120056);
    }

    #[test]
    fn test_bucketed_search_matches_linear_scan() {
        let palette = lumpy_palette();
        for r in (0..=255u16).step_by(15) {
            for g in 0..=255u16 {
                for b in (0..=255u16).step_by(51) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    assert_eq!(
                        palette.find_nearest(r, g, b),
                        palette.find_nearest_linear(r, g, b),
                        "color ({r}, {g}, {b})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_exact_ties_resolve_to_lowest_index() {
        // All entries black: every query ties, index 0 must win.
        let palette = Palette::from_colors(&[[0u8; 3]; NET_SIZE]);
        assert_eq!(palette.find_nearest(90, 200, 10), 0);
        assert_eq!(palette.find_nearest_linear(90, 200, 10), 0);
    }

    #[test]
    fn test_exact_color_is_found() {
        let palette = lumpy_palette();
        for i in 0..NET_SIZE {
            let [r, g, b] = palette.color(i);
            let found = palette.find_nearest(r, g, b) as usize;
            assert_eq!(palette.color(found), [r, g, b]);
            assert!(found <= i, "duplicate colors resolve to the first slot");
        }
    }
}
