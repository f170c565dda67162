//! Render-time layout math built on the seeded generator.

pub mod scatter;
