//! Injected randomness for round generation.
//!
//! Every random decision the quiz makes goes through [`RandomSource::index`],
//! so a scripted source reproduces an exact sequence of picks and shuffles.

use rand::rngs::StdRng;
use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers guarantee `upper > 0`.
    fn index(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Picks `count` distinct items (partial Fisher-Yates over a copy of `pool`).
/// `count` must not exceed `pool.len()`.
pub fn sample_distinct<T: Clone, R: RandomSource + ?Sized>(rng: &mut R, pool: &[T], count: usize) -> Vec<T> {
    let mut scratch = pool.to_vec();
    let count = count.min(scratch.len());
    for i in 0..count {
        let j = i + rng.index(scratch.len() - i);
        scratch.swap(i, j);
    }
    scratch.truncate(count);
    scratch
}

/// Picks `count` items independently; repeats are possible.
pub fn sample_with_replacement<T: Clone, R: RandomSource + ?Sized>(
    rng: &mut R,
    pool: &[T],
    count: usize,
) -> Vec<T> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..count).map(|_| pool[rng.index(pool.len())].clone()).collect()
}
