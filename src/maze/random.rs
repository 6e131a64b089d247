use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// The only source of randomness of the maze algorithms.
///
/// Even the unseeded source remembers the seed it picked, so every maze can be
/// reproduced later from [`RandomSource::seed`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Random,
    seed: u64,
}

impl RandomSource {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Random::seed_from_u64(seed),
            seed,
        }
    }

    pub fn unseeded() -> Self {
        Self::with_seed(thread_rng().gen())
    }

    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::unseeded, Self::with_seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn index(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot pick an index from an empty range");
        self.rng.gen_range(0..n)
    }
}
