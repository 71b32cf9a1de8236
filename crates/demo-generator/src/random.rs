//! Lehmer pseudo-random generator.
//!
//! `state = state * 16807 mod (2^31 - 1)`. The sequence depends only on the
//! seed. Not suitable for anything security related.

use crate::generator::GeneratorError;
use demo_core::DEFAULT_SEED;

/// Multiplier of the minimal-standard Lehmer generator.
pub const LEHMER_MULTIPLIER: u64 = 16_807;

/// Prime modulus `2^31 - 1`.
pub const LEHMER_MODULUS: u64 = 2_147_483_647;

/// Deterministic random source owned by a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator from `seed`.
    ///
    /// Seeds are reduced modulo `2^31 - 1`; a seed that reduces to zero is
    /// rejected because the state would never leave zero.
    pub fn new(seed: u64) -> Result<Self, GeneratorError> {
        let state = seed % LEHMER_MODULUS;
        if state == 0 {
            return Err(GeneratorError::InvalidSeed(seed));
        }
        Ok(Self { state })
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    fn advance(&mut self) -> u64 {
        self.state = self.state * LEHMER_MULTIPLIER % LEHMER_MODULUS;
        self.state
    }

    /// Next value in `[0, 1]`.
    ///
    /// The state `2^31 - 2` maps to exactly `1.0`.
    pub fn next_f64(&mut self) -> f64 {
        (self.advance() - 1) as f64 / (LEHMER_MODULUS - 2) as f64
    }

    /// Next integer in `[min, max]`.
    ///
    /// Always consumes exactly one draw. When `max <= min` the result is `min`.
    /// A draw of `1.0` lands on `max`.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let draw = self.next_f64();
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f64;
        ((draw * span).floor() as i64 + min).min(max)
    }

    /// Pick one element of `items`.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GeneratorError> {
        if items.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "cannot choose from an empty pool".to_string(),
            ));
        }
        let idx = self.next_int(0, items.len() as i64 - 1) as usize;
        items.get(idx).ok_or_else(|| {
            GeneratorError::InvalidArgument(format!(
                "index {idx} outside a pool of {}",
                items.len()
            ))
        })
    }

    /// Consume one draw and report whether it is strictly above `threshold`.
    pub fn draw_exceeds(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self {
            state: DEFAULT_SEED % LEHMER_MODULUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // 739806647 * 16807 mod (2^31 - 1) == 2^31 - 2
    const TOP_STATE_SEED: u64 = 739_806_647;

    #[test]
    fn test_known_sequence_for_default_seed() {
        let mut rng = SeededRandom::new(12345).unwrap();

        assert_eq!(rng.next_f64(), 0.09661652808693845);
        assert_eq!(rng.next_f64(), 0.8339946273099581);
        assert_eq!(rng.next_f64(), 0.9477024976608367);
        assert_eq!(SeededRandom::default().next_int(1, 25), 3);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = SeededRandom::new(42).unwrap();
        let mut rng2 = SeededRandom::new(42).unwrap();
        let pool = ["a", "b", "c", "d"];

        for _ in 0..200 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
            assert_eq!(rng1.next_int(-10, 20), rng2.next_int(-10, 20));
            assert_eq!(rng1.choice(&pool).unwrap(), rng2.choice(&pool).unwrap());
        }
    }

    #[test]
    fn test_next_f64_unit_interval() {
        let mut rng = SeededRandom::default();
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_next_f64_reaches_one() {
        let mut rng = SeededRandom::new(TOP_STATE_SEED).unwrap();
        assert_eq!(rng.next_f64(), 1.0);
        assert!(rng.next_f64() < 1.0);
    }

    #[test]
    fn test_next_int_top_draw_stays_in_range() {
        assert_eq!(SeededRandom::new(TOP_STATE_SEED).unwrap().next_int(1, 25), 25);
        assert_eq!(SeededRandom::new(TOP_STATE_SEED).unwrap().next_int(-3, -1), -1);
        assert_eq!(SeededRandom::new(TOP_STATE_SEED).unwrap().next_int(0, 0), 0);
    }

    #[test]
    fn test_choice_top_draw_picks_last() {
        let mut rng = SeededRandom::new(TOP_STATE_SEED).unwrap();
        assert_eq!(*rng.choice(&["a", "b", "c"]).unwrap(), "c");
    }

    #[test]
    fn test_next_int_range() {
        let mut bounds = StdRng::seed_from_u64(42);
        let mut rng = SeededRandom::default();

        for _ in 0..1_000 {
            let min = bounds.gen_range(-500..=500);
            let max = min + bounds.gen_range(0..=400);
            let value = rng.next_int(min, max);
            assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
        }
    }

    #[test]
    fn test_next_int_degenerate_range() {
        let mut rng = SeededRandom::default();
        for _ in 0..100 {
            assert_eq!(rng.next_int(7, 7), 7);
        }
        assert_eq!(rng.next_int(9, 3), 9);
    }

    #[test]
    fn test_next_int_advances_once() {
        let mut a = SeededRandom::default();
        let mut b = SeededRandom::default();
        a.next_int(5, 5);
        b.next_f64();
        assert_eq!(a, b);
    }

    #[test]
    fn test_choice_empty_pool() {
        let mut rng = SeededRandom::default();
        let empty: [u8; 0] = [];
        assert!(matches!(
            rng.choice(&empty),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_choice_covers_pool() {
        let mut rng = SeededRandom::default();
        let pool = [1usize, 2, 3];
        let mut seen = [false; 3];
        for _ in 0..100 {
            let v = *rng.choice(&pool).unwrap();
            seen[v - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_zero_seed_rejected() {
        assert!(matches!(
            SeededRandom::new(0),
            Err(GeneratorError::InvalidSeed(0))
        ));
        assert!(matches!(
            SeededRandom::new(LEHMER_MODULUS),
            Err(GeneratorError::InvalidSeed(_))
        ));
        assert_eq!(SeededRandom::new(LEHMER_MODULUS + 5).unwrap().state(), 5);
    }
}
