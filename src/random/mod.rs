//! Seeded pseudo-random sequence generation.
//!
//! Provides the sine-driven generator and the seed derivation it is
//! usually paired with. Neither reads ambient entropy or global state.

pub mod seed;
pub mod sine_rand;
