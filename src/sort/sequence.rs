//! Random starting sequences.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Array size used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 15;

/// Inclusive value range used when nothing else is configured.
pub const DEFAULT_RANGE: RangeInclusive<u32> = 1..=50;

/// Produces fresh unsorted sequences of a fixed size and value range.
#[derive(Debug, Clone)]
pub struct RandomArrayGenerator {
    size: usize,
    range: RangeInclusive<u32>,
    rng: StdRng,
}

impl RandomArrayGenerator {
    /// Generator seeded from OS entropy.
    ///
    /// `range` must not be empty.
    pub fn new(size: usize, range: RangeInclusive<u32>) -> Self {
        Self::with_rng(size, range, StdRng::from_entropy())
    }

    /// Deterministic generator: the same seed yields the same sequences.
    pub fn seeded(size: usize, range: RangeInclusive<u32>, seed: u64) -> Self {
        Self::with_rng(size, range, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, range: RangeInclusive<u32>, rng: StdRng) -> Self {
        debug_assert!(!range.is_empty(), "value range must not be empty");
        Self { size, range, rng }
    }

    /// Length of each generated sequence.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Inclusive range values are drawn from.
    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Draw a new sequence.
    pub fn generate(&mut self) -> Vec<u32> {
        let range = self.range.clone();
        (0..self.size)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect()
    }
}

impl Default for RandomArrayGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let mut generator = RandomArrayGenerator::default();
        let values = generator.generate();
        assert_eq!(values.len(), 15);
        assert!(values.iter().all(|v| (1..=50).contains(v)));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomArrayGenerator::seeded(20, 1..=50, 7);
        let mut b = RandomArrayGenerator::seeded(20, 1..=50, 7);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let mut generator = RandomArrayGenerator::seeded(15, 1..=50, 99);
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_single_value_range() {
        let mut generator = RandomArrayGenerator::seeded(4, 9..=9, 1);
        assert_eq!(generator.generate(), vec![9, 9, 9, 9]);
    }

    #[test]
    fn test_zero_size() {
        let mut generator = RandomArrayGenerator::seeded(0, 1..=50, 1);
        assert!(generator.generate().is_empty());
    }
}
