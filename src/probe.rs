//! Bandwidth probe payload and throughput classification.
//!
//! The probe endpoint serves a fixed-size buffer; the client times the
//! download and maps the observed throughput onto a [`ConnectionTier`],
//! which decides how much animation the page can afford.

use std::time::Duration;

use bytes::Bytes;

use crate::error::{Result, SineSeedError};

/// Default probe payload size in bytes (100 KiB).
pub const PROBE_PAYLOAD_BYTES: usize = 100 * 1024;

/// Coarse connection quality derived from a throughput sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectionTier {
    Slow,
    Moderate,
    Fast,
}

/// Probe payload size and tier thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProbeConfig {
    pub payload_bytes: usize,
    /// Samples strictly below this rate (Mbps) are [`ConnectionTier::Slow`].
    pub slow_below_mbps: f64,
    /// Samples at or above this rate (Mbps) are [`ConnectionTier::Fast`].
    pub fast_above_mbps: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            payload_bytes: PROBE_PAYLOAD_BYTES,
            slow_below_mbps: 1.5,
            fast_above_mbps: 10.0,
        }
    }
}

impl ProbeConfig {
    /// Checks payload size and threshold ordering.
    ///
    /// # Errors
    /// - [`SineSeedError::EmptyPayload`] if `payload_bytes == 0`.
    /// - [`SineSeedError::InvalidThresholds`] if a threshold is not finite,
    ///   is negative, or `slow_below_mbps > fast_above_mbps`.
    pub fn validate(&self) -> Result<()> {
        if self.payload_bytes == 0 {
            return Err(SineSeedError::EmptyPayload);
        }
        let slow = self.slow_below_mbps;
        let fast = self.fast_above_mbps;
        if !slow.is_finite() || !fast.is_finite() || slow < 0.0 || slow > fast {
            return Err(SineSeedError::InvalidThresholds { slow, fast });
        }
        Ok(())
    }

    /// Builds the zero-filled probe body.
    ///
    /// # Errors
    /// Any error from [`validate`](Self::validate); a zero-length payload
    /// is [`SineSeedError::EmptyPayload`].
    pub fn payload(&self) -> Result<Bytes> {
        self.validate()?;
        Ok(zero_filled(self.payload_bytes))
    }

    /// Maps a throughput sample onto a tier.
    ///
    /// # Errors
    /// Any error from [`validate`](Self::validate), so a config with
    /// unusable thresholds never yields a tier.
    pub fn classify(&self, sample: &Throughput) -> Result<ConnectionTier> {
        self.validate()?;
        let mbps = sample.megabits_per_second();
        let tier = if mbps < self.slow_below_mbps {
            ConnectionTier::Slow
        } else if mbps < self.fast_above_mbps {
            ConnectionTier::Moderate
        } else {
            ConnectionTier::Fast
        };
        tracing::debug!(mbps, ?tier, "classified bandwidth probe");
        Ok(tier)
    }
}

/// Returns the default-size probe body.
pub fn probe_payload() -> Bytes {
    zero_filled(PROBE_PAYLOAD_BYTES)
}

fn zero_filled(len: usize) -> Bytes {
    Bytes::from(vec![0u8; len])
}

/// A timed transfer of `bytes` over `elapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    bytes: u64,
    elapsed: Duration,
}

impl Throughput {
    /// Records a transfer sample.
    ///
    /// # Errors
    /// Returns [`SineSeedError::ZeroElapsed`] if `elapsed` is zero.
    pub fn measure(bytes: u64, elapsed: Duration) -> Result<Self> {
        if elapsed.is_zero() {
            return Err(SineSeedError::ZeroElapsed);
        }
        Ok(Throughput { bytes, elapsed })
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn bits_per_second(&self) -> f64 {
        (self.bytes as f64 * 8.0) / self.elapsed.as_secs_f64()
    }

    /// Throughput in megabits (10^6 bits) per second.
    pub fn megabits_per_second(&self) -> f64 {
        self.bits_per_second() / 1_000_000.0
    }
}
