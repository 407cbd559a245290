//! The self-organizing quantization network and its training loop.
//!
//! A [`Network`] holds 256 neurons in a fixed-point color space together
//! with per-neuron frequency and bias counters. The [`Trainer`] walks the
//! pixel buffer with a prime stride and pulls the winning neuron (and its
//! neighbors in index space) toward each sampled color.
//!
//! All arithmetic is integer fixed-point. Channel values are stored shifted
//! left by [`NET_BIAS_SHIFT`] bits so that small moves are not lost to
//! truncation.

mod network;
mod trainer;

pub use network::{Network, Neuron};
pub use trainer::{SamplingPlan, Trainer};

/// Number of colors in the network.
pub const NET_SIZE: usize = 256;

/// Number of learning cycles the sample budget is split into.
pub(crate) const CYCLES: i32 = 100;

/// Bias for color values.
pub const NET_BIAS_SHIFT: i32 = 4;

/// Bias for fractions in the frequency and bias tables.
pub(crate) const INT_BIAS_SHIFT: i32 = 16;
pub(crate) const INT_BIAS: i32 = 1 << INT_BIAS_SHIFT;
pub(crate) const GAMMA_SHIFT: i32 = 10;
pub(crate) const BETA_SHIFT: i32 = 10;
/// beta = 1/1024
pub(crate) const BETA: i32 = INT_BIAS >> BETA_SHIFT;
pub(crate) const BETA_GAMMA: i32 = INT_BIAS << (GAMMA_SHIFT - BETA_SHIFT);

/// Radius starts at 32.0 (for 256 colors) biased by 6 bits.
pub(crate) const INIT_RAD: i32 = (NET_SIZE >> 3) as i32;
pub(crate) const RADIUS_BIAS_SHIFT: i32 = 6;
pub(crate) const RADIUS_BIAS: i32 = 1 << RADIUS_BIAS_SHIFT;
pub(crate) const INIT_RADIUS: i32 = INIT_RAD * RADIUS_BIAS;
/// Radius shrinks by 1/30 each cycle.
pub(crate) const RADIUS_DEC: i32 = 30;

/// Alpha starts at 1.0 biased by 10 bits.
pub(crate) const ALPHA_BIAS_SHIFT: i32 = 10;
pub(crate) const INIT_ALPHA: i32 = 1 << ALPHA_BIAS_SHIFT;

pub(crate) const RAD_BIAS_SHIFT: i32 = 8;
pub(crate) const RAD_BIAS: i32 = 1 << RAD_BIAS_SHIFT;
pub(crate) const ALPHA_RAD_BIAS_SHIFT: i32 = ALPHA_BIAS_SHIFT + RAD_BIAS_SHIFT;
pub(crate) const ALPHA_RAD_BIAS: i32 = 1 << ALPHA_RAD_BIAS_SHIFT;

/// Four primes near 500. No realistic buffer length is divisible by all four.
pub const PRIMES: [usize; 4] = [499, 491, 487, 503];

/// Buffers shorter than this are sampled pixel by pixel.
pub const MIN_PICTURE_BYTES: usize = 3 * PRIMES[3];

/// Accepted range for the sampling quality factor.
pub const QUALITY_RANGE: std::ops::RangeInclusive<u8> = 1..=30;
