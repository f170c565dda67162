//! Deterministic placement of decorative particles.
//!
//! A scatter is keyed by a name: the same key and [`ScatterConfig`] always
//! produce the same particles, so markup rendered ahead of time matches the
//! first client render exactly. Each particle consumes six draws, in the
//! order `left`, `top`, `size`, `opacity`, `duration`, `delay`.

use crate::error::{Result, SineSeedError};
use crate::random::sine_rand::SineRand;

/// Number of generator draws consumed per particle.
pub const DRAWS_PER_PARTICLE: usize = 6;

/// Inclusive-exclusive `[min, max)` span a particle property is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanConfig {
    pub min: f64,
    pub max: f64,
}

impl SpanConfig {
    /// Creates a span from its bounds.
    pub const fn new(min: f64, max: f64) -> Self {
        SpanConfig { min, max }
    }

    fn check(&self, field: &'static str, floor: f64, ceiling: f64) -> Result<()> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.min >= floor
            && self.max <= ceiling;
        if ok {
            Ok(())
        } else {
            Err(SineSeedError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn draw(&self, rng: &mut SineRand) -> f64 {
        rng.next_range(self.min, self.max)
    }
}

/// Layout parameters for a particle scatter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterConfig {
    /// Number of particles. Not capped.
    pub count: usize,
    /// Diameter in pixels.
    pub size: SpanConfig,
    pub opacity: SpanConfig,
    /// Animation period in seconds.
    pub duration: SpanConfig,
    /// Animation start offset in seconds.
    pub delay: SpanConfig,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 24,
            size: SpanConfig::new(1.0, 4.0),
            opacity: SpanConfig::new(0.2, 0.8),
            duration: SpanConfig::new(3.0, 8.0),
            delay: SpanConfig::new(0.0, 5.0),
        }
    }
}

impl ScatterConfig {
    /// Checks that every span is finite, ordered and within its domain.
    ///
    /// # Errors
    /// Returns [`SineSeedError::InvalidRange`] naming the first bad field.
    /// Size, duration and delay must be non-negative; opacity must lie in
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.size.check("size", 0.0, f64::MAX)?;
        self.opacity.check("opacity", 0.0, 1.0)?;
        self.duration.check("duration", 0.0, f64::MAX)?;
        self.delay.check("delay", 0.0, f64::MAX)?;
        Ok(())
    }
}

/// A single placed particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Horizontal position as a percentage of the container, `[0, 100)`.
    pub left: f64,
    /// Vertical position as a percentage of the container, `[0, 100)`.
    pub top: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Lays out `config.count` particles for the scatter named `key`.
///
/// # Parameters
/// - `key`: Stable identifier of the scatter (hashed into the seed).
/// - `config`: Layout parameters.
///
/// # Returns
/// The particles in draw order.
///
/// # Errors
/// Returns [`SineSeedError::InvalidRange`] if `config` fails validation.
///
/// # Examples
///
/// ```
/// use sineseed::layout::scatter::{scatter, ScatterConfig};
///
/// let config = ScatterConfig::default();
/// let server = scatter("hero", &config).unwrap();
/// let client = scatter("hero", &config).unwrap();
/// assert_eq!(server, client);
/// ```
pub fn scatter(key: &str, config: &ScatterConfig) -> Result<Vec<Particle>> {
    tracing::debug!(key, count = config.count, "scattering particles");
    let mut rng = SineRand::from_key(key);
    scatter_with(&mut rng, config)
}

/// Lays out particles drawing from an existing generator.
///
/// Validation happens before any draw, so a rejected config leaves `rng`
/// untouched.
pub fn scatter_with(rng: &mut SineRand, config: &ScatterConfig) -> Result<Vec<Particle>> {
    config.validate()?;
    let particles = (0..config.count)
        .map(|_| Particle {
            left: rng.next_range(0.0, 100.0),
            top: rng.next_range(0.0, 100.0),
            size: config.size.draw(rng),
            opacity: config.opacity.draw(rng),
            duration: config.duration.draw(rng),
            delay: config.delay.draw(rng),
        })
        .collect();
    Ok(particles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_same_layout() {
        let config = ScatterConfig::default();
        let a = scatter("hero", &config).unwrap();
        let b = scatter("hero", &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), config.count);
    }

    #[test]
    fn test_different_keys_differ() {
        let config = ScatterConfig::default();
        let a = scatter("hero", &config).unwrap();
        let b = scatter("contact", &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_particles_within_bounds() {
        let config = ScatterConfig {
            count: 500,
            ..ScatterConfig::default()
        };
        for p in scatter("bounds", &config).unwrap() {
            assert!((0.0..100.0).contains(&p.left), "left: {}", p.left);
            assert!((0.0..100.0).contains(&p.top), "top: {}", p.top);
            assert!((1.0..4.0).contains(&p.size), "size: {}", p.size);
            assert!((0.2..0.8).contains(&p.opacity), "opacity: {}", p.opacity);
            assert!((3.0..8.0).contains(&p.duration), "duration: {}", p.duration);
            assert!((0.0..5.0).contains(&p.delay), "delay: {}", p.delay);
        }
    }

    #[test]
    fn test_draw_order() {
        let config = ScatterConfig {
            count: 1,
            ..ScatterConfig::default()
        };
        let p = scatter("order", &config).unwrap()[0];
        let mut rng = SineRand::from_key("order");
        assert_eq!(p.left, rng.next_double() * 100.0);
        assert_eq!(p.top, rng.next_double() * 100.0);
        assert_eq!(p.size, rng.next_range(1.0, 4.0));
    }

    #[test]
    fn test_narrow_span_far_from_zero_stays_below_max() {
        let config = ScatterConfig {
            count: 50,
            delay: SpanConfig::new(1e16, 1e16 + 2.0),
            ..ScatterConfig::default()
        };
        assert!(config.validate().is_ok());
        for (i, p) in scatter("late", &config).unwrap().iter().enumerate() {
            assert!(
                (config.delay.min..config.delay.max).contains(&p.delay),
                "particle {} delay reached max: {}",
                i,
                p.delay
            );
        }
    }

    #[test]
    fn test_consumes_six_draws_per_particle() {
        let config = ScatterConfig {
            count: 3,
            ..ScatterConfig::default()
        };
        let mut used = SineRand::new(10);
        scatter_with(&mut used, &config).unwrap();

        let mut reference = SineRand::new(10);
        for _ in 0..config.count * DRAWS_PER_PARTICLE {
            reference.next_double();
        }
        assert_eq!(used.next_double(), reference.next_double());
    }

    #[test]
    fn test_zero_count_draws_nothing() {
        let config = ScatterConfig {
            count: 0,
            ..ScatterConfig::default()
        };
        let mut used = SineRand::new(0);
        assert!(scatter_with(&mut used, &config).unwrap().is_empty());
        assert_eq!(used.next_double(), 0.0);
    }

    #[test]
    fn test_fixed_span_yields_constant() {
        let config = ScatterConfig {
            count: 10,
            size: SpanConfig::new(2.0, 2.0),
            ..ScatterConfig::default()
        };
        for p in scatter("fixed", &config).unwrap() {
            assert_eq!(p.size, 2.0);
        }
    }

    #[test]
    fn test_validate_rejects_inverted_span() {
        let config = ScatterConfig {
            size: SpanConfig::new(4.0, 1.0),
            ..ScatterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SineSeedError::InvalidRange {
                field: "size",
                min: 4.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_opacity_above_one() {
        let config = ScatterConfig {
            opacity: SpanConfig::new(0.5, 1.5),
            ..ScatterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SineSeedError::InvalidRange {
                field: "opacity",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_delay_and_nan() {
        let negative = ScatterConfig {
            delay: SpanConfig::new(-1.0, 1.0),
            ..ScatterConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = ScatterConfig {
            duration: SpanConfig::new(f64::NAN, 1.0),
            ..ScatterConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_invalid_config_leaves_rng_untouched() {
        let config = ScatterConfig {
            size: SpanConfig::new(f64::INFINITY, f64::INFINITY),
            ..ScatterConfig::default()
        };
        let mut rng = SineRand::new(0);
        assert!(scatter_with(&mut rng, &config).is_err());
        assert_eq!(rng.next_double(), 0.0);
    }
}
