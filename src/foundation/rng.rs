//! Injected randomness.
//!
//! Every primitive and composer draws from a [`RandomSource`] handed to it explicitly, so a seeded
//! source reproduces fragment lists exactly. Production runs use a time-derived base seed which is
//! logged, and each creature gets its own stream derived from that seed and its id.

use crate::foundation::math::Fnv1a64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random source in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)` (or the reverse interval when `lo > hi`).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Symmetric jitter in `[-amount/2, amount/2)`.
    fn jitter(&mut self, amount: f64) -> f64 {
        (self.next_f64() - 0.5) * amount
    }
}

/// Deterministic ChaCha8-backed source.
#[derive(Clone, Debug)]
pub struct SpriteRng(ChaCha8Rng);

impl SpriteRng {
    /// Seed directly.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Independent stream for one creature: the base seed mixed with the creature id.
    ///
    /// Streams depend only on `(base_seed, id)`, never on scheduling order.
    pub fn for_creature(base_seed: u64, id: &str) -> Self {
        let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS ^ base_seed);
        h.write_bytes(id.as_bytes());
        h.write_u64(base_seed);
        Self::seeded(h.finish())
    }
}

impl RandomSource for SpriteRng {
    fn next_f64(&mut self) -> f64 {
        // rand's f64 Standard distribution is [0, 1).
        self.0.r#gen::<f64>()
    }
}

/// Base seed for unseeded production runs, derived from the wall clock.
pub fn time_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let mut h = Fnv1a64::new_default();
    h.write_bytes(&nanos.to_le_bytes());
    h.write_u64(u64::from(std::process::id()));
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
