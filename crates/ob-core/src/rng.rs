//! The run's single deterministic random source.
//!
//! # Determinism strategy
//!
//! A whole simulation draws from exactly one `SimRng`, seeded once when it is
//! constructed and never reseeded.  The engine consumes it in a fixed order
//! (person insertion order for routines and measures, roster order for
//! location interactions), so a fixed seed reproduces an identical outbreak
//! trajectory bit-for-bit.
//!
//! The generator is an owned value, not global state: the `City` owns it and
//! lends it to policies as `&mut SimRng`.  Independent cities built with
//! independent generators can therefore run side by side in tests.
//!
//! Because the only constructor takes a seed, drawing from an unseeded
//! source cannot be expressed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Simulation-level RNG shared by every stochastic decision of a run.
///
/// Used only in single-threaded contexts.  Each call consumes randomness in
/// the order it is made; reordering calls changes the outcome.
pub struct SimRng {
    seed:  u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, inner: SmallRng::seed_from_u64(seed) }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound == 0`; callers check for empty candidate sets first.
    #[inline]
    pub fn next_int(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Uniform double in `[0, 1)`.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.inner.r#gen::<f64>()
    }

    /// Standard normal sample (mean 0, standard deviation 1).
    #[inline]
    pub fn next_gaussian(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` (without drawing) if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let i = self.next_int(slice.len());
        slice.get(i)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimRng").field("seed", &self.seed).finish_non_exhaustive()
    }
}
