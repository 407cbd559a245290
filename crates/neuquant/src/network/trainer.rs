//! The fixed-budget learning loop.

use super::network::Network;
use super::{
    CYCLES, INIT_ALPHA, INIT_RADIUS, MIN_PICTURE_BYTES, NET_BIAS_SHIFT, NET_SIZE, PRIMES,
    RADIUS_BIAS_SHIFT, RADIUS_DEC, RAD_BIAS,
};

/// How a buffer of a given length is walked during training.
///
/// Computed up front so the numbers can be logged and tested without
/// running the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPlan {
    /// Effective quality factor. Forced to 1 for small buffers.
    pub quality: i32,
    /// Cursor step in bytes, always a multiple of 3.
    pub stride: usize,
    /// Number of contests to run.
    pub samples: usize,
    /// Contests between two alpha/radius decays.
    pub delta: usize,
    /// Divisor for the per-cycle alpha decay.
    pub alpha_decay: i32,
}

impl SamplingPlan {
    /// Plan a training run over `len` bytes of RGB data.
    ///
    /// `quality` must already be validated to `1..=30`.
    pub fn new(len: usize, quality: u8) -> Self {
        let (quality, stride) = if len < MIN_PICTURE_BYTES {
            (1, 3)
        } else {
            let prime = PRIMES
                .iter()
                .copied()
                .find(|&p| len % p != 0)
                .unwrap_or(PRIMES[3]);
            (quality as i32, 3 * prime)
        };

        let samples = len / (3 * quality as usize);
        let delta = (samples / CYCLES as usize).max(1);

        Self {
            quality,
            stride,
            samples,
            delta,
            alpha_decay: 30 + (quality - 1) / 3,
        }
    }
}

/// Owns a [`Network`] for the duration of one training run.
pub struct Trainer {
    network: Network,
    radpower: [i32; NET_SIZE >> 3],
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Trainer {
    pub fn new() -> Self {
        Self {
            network: Network::new(),
            radpower: [0; NET_SIZE >> 3],
        }
    }

    /// Train on `pixels` (packed RGB, length a multiple of 3) and return the
    /// trained network.
    pub fn train(mut self, pixels: &[u8], plan: &SamplingPlan) -> Network {
        let len = pixels.len();

        tracing::debug!(
            bytes = len,
            quality = plan.quality,
            stride = plan.stride,
            samples = plan.samples,
            "Training quantization network"
        );

        let mut alpha = INIT_ALPHA;
        let mut radius = INIT_RADIUS;
        let mut rad = radius_for(radius);
        self.fill_radpower(alpha, rad);

        let mut pos = 0;
        for i in 1..=plan.samples {
            let r = (pixels[pos] as i32) << NET_BIAS_SHIFT;
            let g = (pixels[pos + 1] as i32) << NET_BIAS_SHIFT;
            let b = (pixels[pos + 2] as i32) << NET_BIAS_SHIFT;

            let winner = self.network.contest(r, g, b);
            self.network.alter_single(alpha, winner, r, g, b);
            if rad != 0 {
                self.network
                    .alter_neighbors(&self.radpower, rad, winner, r, g, b);
            }

            pos += plan.stride;
            if pos >= len {
                pos -= len;
            }

            if i % plan.delta == 0 {
                alpha -= alpha / plan.alpha_decay;
                radius -= radius / RADIUS_DEC;
                rad = radius_for(radius);
                self.fill_radpower(alpha, rad);
            }
        }

        self.network
    }

    /// Falloff weights for each distance from the winner, scaled by alpha.
    fn fill_radpower(&mut self, alpha: i32, rad: i32) {
        let rad2 = rad * rad;
        for (i, slot) in self.radpower.iter_mut().take(rad as usize).enumerate() {
            let i = i as i32;
            *slot = alpha * (((rad2 - i * i) * RAD_BIAS) / rad2);
        }
    }
}

/// Neighborhood radius in neuron slots; radii of 1 or less disable it.
fn radius_for(radius: i32) -> i32 {
    let rad = radius >> RADIUS_BIAS_SHIFT;
    if rad <= 1 {
        0
    } else {
        rad
    }
}
