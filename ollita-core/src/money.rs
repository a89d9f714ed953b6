//! Money arithmetic helpers using rust_decimal for precision
//!
//! Monetary figures cross the API as `f64`, but every sum, quotient,
//! and rounding step runs on `Decimal` internally so repeated
//! aggregation cannot accumulate binary floating-point error.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Input values are validated finite at the command boundary. If
/// NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// rather than poisoning a settlement.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a Decimal to 2 decimal places, half away from zero
#[inline]
pub fn round2_dec(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for the API surface, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2_dec(value)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs capped at the validation
        // boundary is always within f64 representable range (~1.8e308)
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round an f64 monetary figure to 2 decimal places, half up
#[inline]
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}
