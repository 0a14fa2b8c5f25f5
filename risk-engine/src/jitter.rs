//! Randomness behind the display confidence

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the jitter range
pub const JITTER_SPAN: f64 = 20.0;

/// Source of the random term added to the confidence value.
///
/// Implementations return a value in `[0, JITTER_SPAN)`.
pub trait JitterSource: Send + Sync {
    /// Draw one jitter value
    fn jitter(&self) -> f64;
}

/// Draws from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn jitter(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..JITTER_SPAN)
    }
}

/// Reproducible jitter from a seeded RNG
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    /// Create from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn jitter(&self) -> f64 {
        self.rng.lock().gen_range(0.0..JITTER_SPAN)
    }
}

/// Constant jitter, for pinning confidence in tests
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Create with a value; out-of-range values are clamped into the span
    pub fn new(value: f64) -> Self {
        Self(clamp_jitter(value))
    }
}

impl JitterSource for FixedJitter {
    fn jitter(&self) -> f64 {
        self.0
    }
}

/// Force a value into `[0, JITTER_SPAN)`; NaN maps to 0
pub(crate) fn clamp_jitter(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value >= JITTER_SPAN {
        // largest f64 below the span
        f64::from_bits(JITTER_SPAN.to_bits() - 1)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_in_range() {
        let source = ThreadRngJitter;
        for _ in 0..1_000 {
            let j = source.jitter();
            assert!((0.0..JITTER_SPAN).contains(&j));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededJitter::new(7);
        let b = SeededJitter::new(7);
        let xs: Vec<f64> = (0..16).map(|_| a.jitter()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.jitter()).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|j| (0.0..JITTER_SPAN).contains(j)));
    }

    #[test]
    fn test_fixed_clamps() {
        assert_eq!(FixedJitter::new(5.5).jitter(), 5.5);
        assert_eq!(FixedJitter::new(-3.0).jitter(), 0.0);
        assert_eq!(FixedJitter::new(f64::NAN).jitter(), 0.0);
        assert!(FixedJitter::new(25.0).jitter() < JITTER_SPAN);
    }
}
