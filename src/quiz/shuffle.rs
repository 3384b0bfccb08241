//! Generic permutation engine
//!
//! Uniform Fisher–Yates shuffle, generic over the random source so callers
//! can pass `rand::thread_rng()` in production and a seeded [`rand::rngs::StdRng`]
//! in tests. The shuffle is used both on the question list and, per question,
//! on its choices; both callers need the original order preserved, so the
//! public entry point clones the input and permutes the copy.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`, leaving the original untouched
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// In-place Fisher–Yates: for i from n−1 down to 1, swap i with a uniform
/// j in [0, i]
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
