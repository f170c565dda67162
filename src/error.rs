//! Error types for the sineseed library.
//!
//! The generator core never fails. Only the configuration-driven helpers
//! (floating-point seeds, scatter layout, bandwidth probe) return errors.

use thiserror::Error;

/// Errors produced by the sineseed library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SineSeedError {
    /// A floating-point seed was NaN or infinite.
    #[error("Seed must be a finite number, got {0}")]
    NonFiniteSeed(f64),
    /// A configured `[min, max]` span is unusable.
    #[error("Invalid range for `{field}`: [{min}, {max}]")]
    InvalidRange {
        /// Name of the offending config field.
        field: &'static str,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The bandwidth probe payload size is zero.
    #[error("Probe payload must be at least 1 byte long")]
    EmptyPayload,
    /// A throughput sample was taken over a zero-length interval.
    #[error("Elapsed time must be greater than zero")]
    ZeroElapsed,
    /// Connection tier thresholds are not finite, negative, or out of order.
    #[error("Invalid tier thresholds: slow below {slow} Mbps, fast above {fast} Mbps")]
    InvalidThresholds {
        /// Configured `slow_below_mbps`.
        slow: f64,
        /// Configured `fast_above_mbps`.
        fast: f64,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SineSeedError>;
