//! Seeded 2D coherent noise normalized to `[0, 1]`.

use std::fmt;

use ::noise::{NoiseFn, OpenSimplex};
use rand::Rng;

/// Upper bound (exclusive) for seeds drawn by [`NoiseField::random`].
pub const MAX_RANDOM_SEED: u64 = 1000;

/// Peak magnitude of 2D [`OpenSimplex`] output. Raw values are divided by
/// this before mapping, so the field covers `[0, 1]` rather than its middle half.
pub const OPEN_SIMPLEX_AMPLITUDE: f64 = 0.544;

/// OpenSimplex noise field with a fixed seed.
pub struct NoiseField {
    seed: u64,
    source: OpenSimplex,
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        // Fold the high half in so seeds differing only above bit 31 still differ.
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            seed,
            source: OpenSimplex::new(folded),
        }
    }

    /// Field seeded from the thread-local RNG in `[0, MAX_RANDOM_SEED)`.
    pub fn random() -> Self {
        Self::new(rand::thread_rng().gen_range(0..MAX_RANDOM_SEED))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Noise value at `(x, y)`, always within `[0, 1]`.
    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        let raw = self.source.get([x, y]);
        ((raw / OPEN_SIMPLEX_AMPLITUDE + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}
