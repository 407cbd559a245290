//! Neuron storage, the contest and the two update rules.

use super::{
    ALPHA_RAD_BIAS, BETA, BETA_GAMMA, BETA_SHIFT, GAMMA_SHIFT, INIT_ALPHA, INT_BIAS,
    INT_BIAS_SHIFT, NET_BIAS_SHIFT, NET_SIZE,
};

/// One candidate color.
///
/// Channels are in the biased fixed-point domain while training and in the
/// plain `0..=255` domain after [`Network::unbias`]. `index` records the slot
/// the neuron occupied before palette sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neuron {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub index: u8,
}

impl Neuron {
    /// Manhattan distance to a biased color.
    #[inline]
    fn distance(&self, r: i32, g: i32, b: i32) -> i32 {
        (self.r - r).abs() + (self.g - g).abs() + (self.b - b).abs()
    }

    /// Move toward a biased color by `weight / scale` of the remaining distance.
    #[inline]
    fn pull(&mut self, weight: i32, scale: i32, r: i32, g: i32, b: i32) {
        self.r -= weight * (self.r - r) / scale;
        self.g -= weight * (self.g - g) / scale;
        self.b -= weight * (self.b - b) / scale;
    }
}

/// The 256-neuron network with its frequency and bias tables.
#[derive(Debug, Clone)]
pub struct Network {
    neurons: [Neuron; NET_SIZE],
    freq: [i32; NET_SIZE],
    bias: [i32; NET_SIZE],
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Create a network initialized to a gray ramp with uniform frequencies.
    pub fn new() -> Self {
        let mut neurons = [Neuron::default(); NET_SIZE];
        for (i, n) in neurons.iter_mut().enumerate() {
            let v = ((i as i32) << (NET_BIAS_SHIFT + 8)) / NET_SIZE as i32;
            *n = Neuron {
                r: v,
                g: v,
                b: v,
                index: i as u8,
            };
        }
        Self {
            neurons,
            freq: [INT_BIAS / NET_SIZE as i32; NET_SIZE],
            bias: [0; NET_SIZE],
        }
    }

    pub fn neurons(&self) -> &[Neuron; NET_SIZE] {
        &self.neurons
    }

    pub fn frequencies(&self) -> &[i32; NET_SIZE] {
        &self.freq
    }

    pub fn biases(&self) -> &[i32; NET_SIZE] {
        &self.bias
    }

    /// Find the neuron that should learn the biased color `(r, g, b)`.
    ///
    /// The neuron with the smallest raw distance gets its frequency bumped.
    /// The returned neuron is the one with the smallest distance after the
    /// bias correction, so that neurons which rarely win become more
    /// attractive over time. Every neuron's frequency decays and its bias
    /// grows on each call.
    pub fn contest(&mut self, r: i32, g: i32, b: i32) -> usize {
        let mut best_d = i32::MAX;
        let mut best_bias_d = i32::MAX;
        let mut best_pos = 0;
        let mut best_bias_pos = 0;

        for i in 0..NET_SIZE {
            let dist = self.neurons[i].distance(r, g, b);
            if dist < best_d {
                best_d = dist;
                best_pos = i;
            }

            let bias_dist = dist - (self.bias[i] >> (INT_BIAS_SHIFT - NET_BIAS_SHIFT));
            if bias_dist < best_bias_d {
                best_bias_d = bias_dist;
                best_bias_pos = i;
            }

            let beta_freq = self.freq[i] >> BETA_SHIFT;
            self.freq[i] -= beta_freq;
            self.bias[i] += beta_freq << GAMMA_SHIFT;
        }

        self.freq[best_pos] += BETA;
        self.bias[best_pos] -= BETA_GAMMA;

        best_bias_pos
    }

    /// Move neuron `i` toward the biased color by `alpha / INIT_ALPHA`.
    pub fn alter_single(&mut self, alpha: i32, i: usize, r: i32, g: i32, b: i32) {
        self.neurons[i].pull(alpha, INIT_ALPHA, r, g, b);
    }

    /// Move the neurons within `rad` slots of `i` toward the biased color.
    ///
    /// `radpower[m]` is the weight for the neurons at distance `m` on both
    /// sides. The lower bound is `|i - rad|`, so a winner close to slot 0
    /// only pulls the neurons above it and a few below.
    pub fn alter_neighbors(
        &mut self,
        radpower: &[i32],
        rad: i32,
        i: usize,
        r: i32,
        g: i32,
        b: i32,
    ) {
        let i = i as i32;
        let lo = (i - rad).abs();
        let hi = (i + rad).min(NET_SIZE as i32);

        let mut j = i + 1;
        let mut k = i - 1;
        let mut m = 1;

        while j < hi || k > lo {
            let a = radpower[m];
            m += 1;

            if j < hi {
                self.neurons[j as usize].pull(a, ALPHA_RAD_BIAS, r, g, b);
                j += 1;
            }
            if k > lo {
                self.neurons[k as usize].pull(a, ALPHA_RAD_BIAS, r, g, b);
                k -= 1;
            }
        }
    }

    /// Shift every neuron back to byte range and stamp its slot index.
    pub fn unbias(&mut self) {
        for (i, n) in self.neurons.iter_mut().enumerate() {
            n.r >>= NET_BIAS_SHIFT;
            n.g >>= NET_BIAS_SHIFT;
            n.b >>= NET_BIAS_SHIFT;
            n.index = i as u8;
        }
    }

    pub(crate) fn into_neurons(self) -> [Neuron; NET_SIZE] {
        self.neurons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_gray_ramp() {
        let net = Network::new();
        for (i, n) in net.neurons().iter().enumerate() {
            let v = (i as i32) << NET_BIAS_SHIFT;
            assert_eq!((n.r, n.g, n.b), (v, v, v), "neuron {i}");
        }
        assert!(net.frequencies().iter().all(|&f| f == 256));
        assert!(net.biases().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_contest_returns_nearest_on_fresh_network() {
        let mut net = Network::new();
        let v = 100 << NET_BIAS_SHIFT;
        assert_eq!(net.contest(v, v, v), 100);
    }

    #[test]
    fn test_contest_ties_go_to_lowest_index() {
        let mut net = Network::new();
        // Exactly halfway between neurons 10 and 11.
        let v = (10 << NET_BIAS_SHIFT) + 8;
        assert_eq!(net.contest(v, v, v), 10);
    }

    #[test]
    fn test_contest_ages_every_neuron() {
        let mut net = Network::new();
        let v = 40 << NET_BIAS_SHIFT;
        net.contest(v, v, v);

        // 256 - (256 >> 10) stays 256; the winner gains beta.
        assert_eq!(net.frequencies()[40], 256 + BETA);
        assert_eq!(net.biases()[40], -BETA_GAMMA);
        assert_eq!(net.frequencies()[0], 256);
    }

    #[test]
    fn test_bias_penalizes_repeat_winner() {
        let mut net = Network::new();
        let v = 128 << NET_BIAS_SHIFT;
        for _ in 0..20 {
            net.contest(v, v, v);
        }
        // Neuron 128 is still the closest, but its bias has gone negative
        // so a neighbor wins the biased contest.
        assert!(net.biases()[128] < 0);
        assert_ne!(net.contest(v, v, v), 128);
    }

    #[test]
    fn test_alter_single_full_alpha_lands_on_target() {
        let mut net = Network::new();
        let (r, g, b) = (255 << 4, 0, 17 << 4);
        net.alter_single(INIT_ALPHA, 3, r, g, b);
        let n = net.neurons()[3];
        assert_eq!((n.r, n.g, n.b), (r, g, b));
    }

    #[test]
    fn test_alter_single_half_alpha_moves_halfway() {
        let mut net = Network::new();
        net.alter_single(INIT_ALPHA / 2, 0, 200 << 4, 0, 0);
        assert_eq!(net.neurons()[0].r, 100 << 4);
    }

    #[test]
    fn test_alter_neighbors_leaves_far_neurons() {
        let mut net = Network::new();
        let before = *net.neurons();
        let radpower = [ALPHA_RAD_BIAS; 32];
        net.alter_neighbors(&radpower, 4, 100, 0, 0, 0);
        let after = net.neurons();

        assert_eq!(after[100], before[100], "winner is not touched");
        for i in 97..=103 {
            if i != 100 {
                assert_eq!((after[i].r, after[i].g, after[i].b), (0, 0, 0), "slot {i}");
            }
        }
        assert_eq!(after[96], before[96]);
        assert_eq!(after[104], before[104]);
    }

    #[test]
    fn test_unbias_restores_byte_range() {
        let mut net = Network::new();
        net.unbias();
        for (i, n) in net.neurons().iter().enumerate() {
            assert_eq!((n.r, n.g, n.b), (i as i32, i as i32, i as i32));
            assert_eq!(n.index as usize, i);
        }
    }
}
