//! Seedable random number generator for sampling.
//!
//! [`SamplerRng`] wraps `rand::rngs::StdRng` and remembers the seed it was
//! initialised with, so a draw can be reported and reproduced later.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random number generator used by the sampler.
///
/// Implements [`RngCore`], so it can be handed to any generation function
/// taking `R: Rng`.
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use sampler_core::SamplerRng;
///
/// let mut rng1 = SamplerRng::from_seed(12345);
/// let mut rng2 = SamplerRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
/// assert_eq!(rng1.seed(), Some(12345));
/// ```
#[derive(Clone, Debug)]
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, if any.
    seed: Option<u64>,
}

impl SamplerRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a seeded generator when `seed` is given, otherwise an
    /// entropy-seeded one.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, or `None` when seeded
    /// from entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SamplerRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SamplerRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
