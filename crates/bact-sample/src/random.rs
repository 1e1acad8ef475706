//! Randomness capability injected into the generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws the sample generator needs.
pub trait RandomSource {
    /// Integer drawn uniformly from the half-open range `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn int_in(&mut self, low: i64, high: i64) -> i64;

    /// One element of `choices`, drawn uniformly.
    ///
    /// Callers guarantee `choices` is non-empty.
    fn choose<T: Copy>(&mut self, choices: &[T]) -> T {
        let len = i64::try_from(choices.len()).unwrap_or(i64::MAX);
        let idx = self.int_in(0, len).clamp(0, len - 1);
        choices[idx as usize]
    }
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_half_open_range() {
        let mut source = RngSource::seeded(7);
        for _ in 0..500 {
            let value = source.int_in(-1, 2);
            assert!((-1..2).contains(&value));
        }
    }

    #[test]
    fn choose_covers_every_option() {
        let mut source = RngSource::seeded(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked: i64 = source.choose(&[-1, 0, 1]);
            seen[(picked + 1) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
