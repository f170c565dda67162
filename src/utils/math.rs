//! Floating-point helpers shared by the generator and layout code.

/// Largest `f64` strictly below `1.0`.
pub(crate) const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// Returns the floor-based fractional part of `value`, always in `[0, 1)`.
///
/// Unlike [`f64::fract`], which truncates toward zero and keeps the sign,
/// this computes `value - value.floor()`, so negative inputs map onto the
/// same half-open interval as positive ones (`-0.25` becomes `0.75`).
///
/// A tiny negative `value` makes the subtraction round up to exactly `1.0`;
/// that case is pinned to [`ONE_BELOW`].
///
/// # Parameters
/// - `value`: A finite number.
///
/// # Returns
/// The fractional part in `[0, 1)`.
pub(crate) fn fractional_part(value: f64) -> f64 {
    let frac = value - value.floor();
    if frac >= 1.0 {
        ONE_BELOW
    } else {
        frac
    }
}

/// Returns the largest `f64` strictly below the finite value `x`.
pub(crate) fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Linearly maps a unit value `t` in `[0, 1)` onto `[low, high)`.
///
/// Blends `low * (1 - t) + t * high` so that spans wider than `f64::MAX`
/// never overflow, then pins the result into `[low, high)` since rounding
/// can land on `high` when the span is tiny relative to `low`. An empty or
/// inverted span yields `low`.
pub(crate) fn lerp(low: f64, high: f64, t: f64) -> f64 {
    if low >= high {
        return low;
    }
    let value = low * (1.0 - t) + t * high;
    if value >= high {
        next_below(high).max(low)
    } else {
        value.max(low)
    }
}
