//! Tie-breaking between equally scored cells.

use rand::Rng;

/// Picks one of `len` equally good options.
pub trait TieBreaker {
    /// Returns a position in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform choice driven by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomTie<R> {
    rng: R,
}

impl<R: Rng> RandomTie<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TieBreaker for RandomTie<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always takes the first tied option.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTie;

impl TieBreaker for FirstTie {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Takes option `n`, wrapping around when fewer are tied.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTie(pub usize);

impl TieBreaker for FixedTie {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_tie_stays_in_range() {
        let mut tie = RandomTie::new(StdRng::seed_from_u64(7));
        for len in 1..10 {
            for _ in 0..50 {
                assert!(tie.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_random_tie_is_reproducible() {
        let mut a = RandomTie::new(StdRng::seed_from_u64(42));
        let mut b = RandomTie::new(StdRng::seed_from_u64(42));
        let picks_a: Vec<_> = (0..20).map(|_| a.pick(5)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_fixed_tie_wraps() {
        assert_eq!(FixedTie(4).pick(3), 1);
        assert_eq!(FirstTie.pick(9), 0);
    }
}
