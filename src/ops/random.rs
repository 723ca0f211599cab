// ============================================================================
// spark-toolkit - Randomization
// shuffle, sample, sample_one, and the seedable Randomizer
// ============================================================================
//
// Every function takes its random source explicitly. Randomizer bundles a
// StdRng built from RandomConfig for callers that want one owned, seedable
// source; the *_default helpers fall back to the thread-local generator.
// ============================================================================

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::config::RandomConfig;

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// A uniformly random permutation of `seq`, as a new `Vec`.
///
/// Fisher-Yates: for `i` from the last index down to 1, swap element `i`
/// with a uniformly chosen index in `0..=i`. The input is not touched.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spark_toolkit::shuffle;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle(&[1, 2, 3, 4, 5, 6], &mut rng);
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn shuffle<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    tracing::trace!(len = seq.len(), "shuffle");

    let mut out = seq.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// One uniformly random element, or `None` for an empty slice.
pub fn sample_one<'a, T, R>(seq: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    tracing::trace!(len = seq.len(), "sample_one");

    seq.choose(rng)
}

/// `min(n, seq.len())` distinct positions drawn without replacement, in
/// random order.
///
/// Only the first `n` steps of a Fisher-Yates pass run over the copy.
pub fn sample<T, R>(seq: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    tracing::trace!(len = seq.len(), n, "sample");

    let k = n.min(seq.len());
    if k == 0 {
        return Vec::new();
    }

    let mut pool = seq.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, k);
    picked.to_vec()
}

/// [`shuffle`] using the thread-local generator.
pub fn shuffle_default<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle(seq, &mut rand::thread_rng())
}

/// [`sample`] using the thread-local generator.
pub fn sample_default<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    sample(seq, n, &mut rand::thread_rng())
}

/// [`sample_one`] using the thread-local generator.
pub fn sample_one_default<T>(seq: &[T]) -> Option<&T> {
    sample_one(seq, &mut rand::thread_rng())
}

// =============================================================================
// RANDOMIZER
// =============================================================================

/// An owned random source for shuffle and sample.
///
/// # Example
/// ```
/// use spark_toolkit::{RandomConfig, Randomizer};
///
/// let mut a = Randomizer::new(RandomConfig::seeded(42));
/// let mut b = Randomizer::new(RandomConfig::seeded(42));
/// assert_eq!(a.shuffle(&[1, 2, 3, 4, 5]), b.shuffle(&[1, 2, 3, 4, 5]));
/// ```
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
    config: RandomConfig,
}

impl Randomizer {
    pub fn new(config: RandomConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                tracing::debug!(seed, "randomizer seeded");
                StdRng::seed_from_u64(seed)
            }
            None => {
                tracing::debug!("randomizer seeded from entropy");
                StdRng::from_entropy()
            }
        };
        Self { rng, config }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomConfig::seeded(seed))
    }

    /// Built from [`RandomConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(RandomConfig::from_env())
    }

    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    pub fn shuffle<T: Clone>(&mut self, seq: &[T]) -> Vec<T> {
        shuffle(seq, &mut self.rng)
    }

    pub fn sample<T: Clone>(&mut self, seq: &[T], n: usize) -> Vec<T> {
        sample(seq, n, &mut self.rng)
    }

    pub fn sample_one<'a, T>(&mut self, seq: &'a [T]) -> Option<&'a T> {
        sample_one(seq, &mut self.rng)
    }

    /// Direct access to the generator, e.g. for the `json` layer.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(RandomConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
