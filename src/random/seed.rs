//! Seeds and seed derivation.
//!
//! A [`Seed`] is the single value that fully determines a [`SineRand`]
//! sequence. Seeds are either plain numbers or are derived from a
//! human-readable key with [`seed_from_string`], which reproduces the
//! classic 31-multiplier string hash bit for bit: the accumulator wraps
//! as a 32-bit signed integer and walks the string's UTF-16 code units.
//!
//! [`SineRand`]: super::sine_rand::SineRand

use crate::error::{Result, SineSeedError};

/// Multiplier of the rolling string hash.
const HASH_MULTIPLIER: i32 = 31;

/// A finite numeric seed.
///
/// Integer types convert infallibly. Values beyond 2^53 round to the
/// nearest `f64`, which is exactly what a double-backed number would hold.
/// Floating-point seeds go through [`TryFrom<f64>`] so that NaN and
/// infinities are rejected up front instead of poisoning the sequence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Seed(f64);

impl Seed {
    /// Returns the seed as the `f64` the generator counter starts from.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Seed {
    type Error = SineSeedError;

    fn try_from(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Seed(value))
        } else {
            Err(SineSeedError::NonFiniteSeed(value))
        }
    }
}

impl TryFrom<f32> for Seed {
    type Error = SineSeedError;

    fn try_from(value: f32) -> Result<Self> {
        Seed::try_from(f64::from(value))
    }
}

macro_rules! impl_seed_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Seed(f64::from(value))
                }
            }
        )*
    };
}

impl_seed_from_lossless!(i8, u8, i16, u16, i32, u32);

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed(value as f64)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value as f64)
    }
}

/// Anything that can deterministically produce a [`Seed`].
///
/// Strings hash through [`seed_from_string`]; numbers are used as-is.
/// Implementations must be pure: the same value always yields the same seed.
pub trait SeedSource {
    /// Returns the seed for this source.
    fn seed(&self) -> Seed;
}

impl SeedSource for Seed {
    fn seed(&self) -> Seed {
        *self
    }
}

impl SeedSource for str {
    fn seed(&self) -> Seed {
        Seed::from(seed_from_string(self))
    }
}

impl SeedSource for String {
    fn seed(&self) -> Seed {
        self.as_str().seed()
    }
}

macro_rules! impl_seed_source_numeric {
    ($($ty:ty),*) => {
        $(
            impl SeedSource for $ty {
                fn seed(&self) -> Seed {
                    Seed::from(*self)
                }
            }
        )*
    };
}

impl_seed_source_numeric!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Derives a strictly positive seed from an arbitrary string.
///
/// Starting from `0`, every UTF-16 code unit `c` updates the accumulator as
/// `acc = acc * 31 + c` with 32-bit signed wraparound. The result is
/// `|acc| + 1`, computed unsigned so that `i32::MIN` maps to `2147483649`
/// rather than overflowing.
///
/// # Parameters
/// - `value`: Any string, including the empty string.
///
/// # Returns
/// A seed in `1..=2_147_483_649`. The empty string yields `1`.
///
/// # Examples
///
/// ```
/// use sineseed::seed_from_string;
///
/// assert_eq!(seed_from_string(""), 1);
/// assert_eq!(seed_from_string("hello"), 99_162_323);
/// ```
pub fn seed_from_string(value: &str) -> u32 {
    let hash = value.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs() + 1
}
