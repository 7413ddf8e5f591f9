//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a scripted or seeded
//! implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a reproducible RNG from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Draws a value uniformly from `[low, high]`.
pub fn uniform_f64(rng: &mut dyn DeterministicRng, low: f64, high: f64) -> f64 {
    let unit = rng.next_f64().clamp(0.0, 1.0);
    low + unit * (high - low)
}

/// Draws an index uniformly from `low..len`. Requires `low < len`.
fn index_below(rng: &mut dyn DeterministicRng, low: usize, len: usize) -> usize {
    let last = len - 1;
    let min = u32::try_from(low).unwrap_or(u32::MAX);
    let max = u32::try_from(last).unwrap_or(u32::MAX);
    usize::try_from(rng.next_u32_range(min, max))
        .unwrap_or(last)
        .clamp(low, last)
}

/// Picks one element uniformly from a non-empty pool.
pub fn choose<'a, T, const N: usize>(rng: &mut dyn DeterministicRng, pool: &'a [T; N]) -> &'a T {
    const { assert!(N > 0, "cannot choose from an empty pool") };
    &pool[index_below(rng, 0, N)]
}

/// Samples `K` distinct elements from `pool` without replacement.
///
/// Uses a partial Fisher–Yates shuffle over a copy of the pool.
pub fn sample_distinct<T: Copy, const N: usize, const K: usize>(
    rng: &mut dyn DeterministicRng,
    pool: &[T; N],
) -> [T; K] {
    const { assert!(K > 0 && K <= N, "sample size must be within the pool") };
    let mut items = *pool;
    for i in 0..K {
        let j = index_below(rng, i, N);
        items.swap(i, j);
    }
    std::array::from_fn(|i| items[i])
}
