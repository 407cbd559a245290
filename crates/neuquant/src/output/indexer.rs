//! Nearest-palette-entry lookup for every pixel of a buffer.

use std::collections::HashMap;

use crate::palette::Palette;

/// Cache counters from one [`Indexer::index_with_stats`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Pixels answered from the cache.
    pub hits: usize,
    /// Pixels that needed a palette search.
    pub misses: usize,
}

impl CacheStats {
    /// Fraction of pixels answered from the cache, `0.0` for no pixels.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Maps packed RGB pixels to palette indices.
///
/// Each distinct color is searched once; repeats are served from a cache
/// keyed by the packed 24-bit color. The cache lives only as long as the
/// indexer, which is consumed by [`index`](Self::index).
///
/// # Example
///
/// ```
/// use neuquant::{Indexer, Palette};
///
/// let mut colors = [[0u8; 3]; 256];
/// colors[255] = [255, 255, 255];
/// let palette = Palette::from_colors(&colors);
///
/// let indices = Indexer::new(&palette).index(&[250, 250, 250, 3, 3, 3]);
/// assert_eq!(indices, vec![255, 0]);
/// ```
pub struct Indexer<'a> {
    palette: &'a Palette,
    cache: HashMap<u32, u8>,
    stats: CacheStats,
}

impl<'a> Indexer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Index every pixel of `rgb` (3 bytes per pixel).
    ///
    /// A trailing partial pixel is ignored.
    pub fn index(self, rgb: &[u8]) -> Vec<u8> {
        self.index_with_stats(rgb).0
    }

    /// Like [`index`](Self::index) but also returns the cache counters.
    pub fn index_with_stats(mut self, rgb: &[u8]) -> (Vec<u8>, CacheStats) {
        let mut indices = Vec::with_capacity(rgb.len() / 3);
        for px in rgb.chunks_exact(3) {
            indices.push(self.lookup(px[0], px[1], px[2]));
        }

        tracing::trace!(
            pixels = indices.len(),
            hits = self.stats.hits,
            misses = self.stats.misses,
            "Indexed pixels"
        );

        (indices, self.stats)
    }

    fn lookup(&mut self, r: u8, g: u8, b: u8) -> u8 {
        let key = (r as u32) << 16 | (g as u32) << 8 | b as u32;
        if let Some(&index) = self.cache.get(&key) {
            self.stats.hits += 1;
            return index;
        }
        self.stats.misses += 1;
        let index = self.palette.find_nearest(r, g, b);
        self.cache.insert(key, index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_palette() -> Palette {
        let mut colors = [[0u8; 3]; 256];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = [i as u8; 3];
        }
        Palette::from_colors(&colors)
    }

    #[test]
    fn test_one_index_per_pixel() {
        let palette = gray_palette();
        let rgb = [0, 0, 0, 10, 10, 10, 255, 255, 255, 7];
        let indices = Indexer::new(&palette).index(&rgb);
        assert_eq!(indices, vec![0, 10, 255]);
    }

    #[test]
    fn test_identical_colors_share_an_index() {
        let palette = gray_palette();
        let rgb = [90, 20, 200, 1, 1, 1, 90, 20, 200, 90, 20, 200];
        let (indices, stats) = Indexer::new(&palette).index_with_stats(&rgb);

        assert_eq!(indices[0], indices[2]);
        assert_eq!(indices[0], indices[3]);
        assert_eq!(stats, CacheStats { hits: 2, misses: 2 });
    }

    #[test]
    fn test_uniform_buffer_hits_after_first_pixel() {
        let palette = gray_palette();
        let rgb = [33u8, 44, 55].repeat(100);
        let (_, stats) = Indexer::new(&palette).index_with_stats(&rgb);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 99);
        assert!((stats.hit_ratio() - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_empty_buffer() {
        let palette = gray_palette();
        let (indices, stats) = Indexer::new(&palette).index_with_stats(&[]);
        assert!(indices.is_empty());
        assert_eq!(stats.hit_ratio(), 0.0);
    }
}
