//! Small helpers over the generator's seeded `ChaCha8Rng` stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform-enough value in `0..bound`; zero when `bound` is zero.
pub(super) fn random_below(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    (rng.next_u64() % bound as u64) as usize
}

pub(super) fn random_sign(rng: &mut ChaCha8Rng) -> i32 {
    if rng.next_u32() & 1 == 0 { -1 } else { 1 }
}

/// Fisher-Yates shuffle driven by the generator stream.
pub(super) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_below(rng, i + 1);
        items.swap(i, j);
    }
}
