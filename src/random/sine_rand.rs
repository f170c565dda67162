//! SineRand: deterministic sequence generator driven by the sine function.
//!
//! The generator keeps a single `f64` counter. Each draw scales
//! `sin(counter)` by 10000, bumps the counter by exactly one, and returns
//! the floor-based fractional part of the scaled value. Nothing else feeds
//! the sequence, so server-side and client-side renders that start from the
//! same seed observe identical values.

use super::seed::{seed_from_string, Seed, SeedSource};
use crate::utils::math::{fractional_part, lerp};

/// Scale applied to `sin(counter)` before taking the fractional part.
const SINE_SCALE: f64 = 10000.0;

/// Deterministic pseudo-random generator producing values in `[0, 1)`.
///
/// Two generators built from the same [`Seed`] yield the same sequence,
/// always. The type is intentionally not `Clone`: a sequence can be
/// restarted only by constructing a fresh generator from the seed, never
/// forked or peeked.
///
/// # Examples
///
/// ```
/// use sineseed::SineRand;
///
/// let mut a = SineRand::from_key("hero-particles");
/// let mut b = SineRand::from_key("hero-particles");
/// for _ in 0..8 {
///     assert_eq!(a.next_double(), b.next_double());
/// }
/// ```
#[derive(Debug)]
pub struct SineRand {
    counter: f64,
}

impl SineRand {
    /// Creates a generator whose counter starts at `seed`.
    ///
    /// # Parameters
    /// - `seed`: Any integer, or a [`Seed`] built from a finite float.
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        tracing::trace!(seed = seed.value(), "seeding sine generator");
        SineRand {
            counter: seed.value(),
        }
    }

    /// Creates a generator keyed by a human-readable name.
    ///
    /// Equivalent to `SineRand::new(seed_from_string(key))`.
    pub fn from_key(key: &str) -> Self {
        Self::new(seed_from_string(key))
    }

    /// Creates a generator from any [`SeedSource`].
    pub fn from_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        Self::new(source.seed())
    }

    /// Returns the next value of the sequence, in `[0, 1)`.
    ///
    /// Computes `sin(counter) * 10000`, advances the counter by one, and
    /// returns `scaled - floor(scaled)`.
    pub fn next_double(&mut self) -> f64 {
        let scaled = self.counter.sin() * SINE_SCALE;
        self.counter += 1.0;
        fractional_part(scaled)
    }

    /// Returns the next value mapped onto `[low, high)`.
    ///
    /// Consumes exactly one draw. Any finite bounds are accepted, including
    /// `-f64::MAX..f64::MAX`. When `low >= high` the result is `low`.
    pub fn next_range(&mut self, low: f64, high: f64) -> f64 {
        lerp(low, high, self.next_double())
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Consumes exactly one draw. Probabilities at or below `0` are never
    /// hit; at or above `1` always are.
    pub fn next_bool(&mut self, probability: f64) -> bool {
        self.next_double() < probability
    }

    /// Returns an index in `0..len`, or `None` for an empty collection.
    ///
    /// Consumes one draw only when `len > 0`.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let idx = (self.next_double() * len as f64).floor() as usize;
        // Guards against float rounding at the top of very large ranges.
        Some(idx.min(len - 1))
    }

    /// Returns a reference to an element chosen uniformly from `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.next_index(items.len()).map(|idx| &items[idx])
    }
}

impl Iterator for SineRand {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_double())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Returns a zero-argument generator closure seeded with `seed`.
///
/// Each call yields the next value of the [`SineRand`] sequence.
///
/// # Examples
///
/// ```
/// use sineseed::create_seeded_random;
///
/// let mut random = create_seeded_random(0);
/// assert_eq!(random(), 0.0);
/// ```
pub fn create_seeded_random(seed: impl Into<Seed>) -> impl FnMut() -> f64 {
    let mut rng = SineRand::new(seed);
    move || rng.next_double()
}
