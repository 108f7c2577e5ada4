use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Chooses the confidence reported when the brightness signal is too weak
/// to stand on its own. Results must fall inside `range`.
pub trait AmbiguityPolicy: Send {
    fn ambiguous_confidence(&mut self, raw: f64, range: Range<u8>) -> u8;
    fn name(&self) -> &'static str;
}

/// Uniform draw from the ambiguous range.
pub struct RandomBoost<R = StdRng> {
    rng: R,
}

impl RandomBoost<StdRng> {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + Send> AmbiguityPolicy for RandomBoost<R> {
    fn ambiguous_confidence(&mut self, _raw: f64, range: Range<u8>) -> u8 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    fn name(&self) -> &'static str {
        "RandomBoost"
    }
}

/// Always reports the same value, clamped into the ambiguous range.
#[derive(Debug, Clone, Copy)]
pub struct FixedBoost(pub u8);

impl AmbiguityPolicy for FixedBoost {
    fn ambiguous_confidence(&mut self, _raw: f64, range: Range<u8>) -> u8 {
        if range.is_empty() {
            return range.start;
        }
        self.0.clamp(range.start, range.end - 1)
    }

    fn name(&self) -> &'static str {
        "FixedBoost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_boost_stays_in_range() {
        let mut policy = RandomBoost::seeded(42);
        for _ in 0..1_000 {
            let value = policy.ambiguous_confidence(10.0, 60..80);
            assert!((60..80).contains(&value));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomBoost::seeded(9);
        let mut b = RandomBoost::seeded(9);
        let xs: Vec<u8> = (0..32).map(|_| a.ambiguous_confidence(0.0, 60..80)).collect();
        let ys: Vec<u8> = (0..32).map(|_| b.ambiguous_confidence(0.0, 60..80)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn fixed_boost_is_clamped() {
        assert_eq!(FixedBoost(70).ambiguous_confidence(0.0, 60..80), 70);
        assert_eq!(FixedBoost(5).ambiguous_confidence(0.0, 60..80), 60);
        assert_eq!(FixedBoost(95).ambiguous_confidence(0.0, 60..80), 79);
    }
}
