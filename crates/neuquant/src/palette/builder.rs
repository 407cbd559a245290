//! Turns a trained network into a sorted [`Palette`].

use super::palette::Palette;
use crate::network::{Network, Neuron, NET_SIZE};

const MAX_NET_POS: usize = NET_SIZE - 1;

/// Unbias, sort and index a trained network.
pub fn build_palette(mut network: Network) -> Palette {
    network.unbias();
    let mut neurons = network.into_neurons();
    let bucket = sort_by_green(&mut neurons);
    Palette::from_parts(neurons, bucket)
}

/// Selection sort on the green channel, returning the bucket index.
///
/// Each pass swaps the first minimum of the remaining slots into place.
/// The bucket index maps every green value to the middle of the run of
/// neurons carrying it; values without a neuron point at the start of the
/// next run, values above the largest green at the last slot.
pub(crate) fn sort_by_green(neurons: &mut [Neuron; NET_SIZE]) -> [u8; NET_SIZE] {
    let mut bucket = [0u8; NET_SIZE];
    let mut previous = 0usize;
    let mut start = 0usize;

    for i in 0..NET_SIZE {
        let mut small_pos = i;
        let mut small_val = neurons[i].g;
        for (j, n) in neurons.iter().enumerate().skip(i + 1) {
            if n.g < small_val {
                small_pos = j;
                small_val = n.g;
            }
        }
        neurons.swap(i, small_pos);

        let small_val = small_val as usize;
        if small_val != previous {
            bucket[previous] = ((start + i) >> 1) as u8;
            for slot in bucket.iter_mut().take(small_val).skip(previous + 1) {
                *slot = i as u8;
            }
            previous = small_val;
            start = i;
        }
    }

    bucket[previous] = ((start + MAX_NET_POS) >> 1) as u8;
    for slot in bucket.iter_mut().skip(previous + 1) {
        *slot = MAX_NET_POS as u8;
    }

    bucket
}
