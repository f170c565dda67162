//! Internal numeric helpers.

pub(crate) mod math;
