//! Accumulation/distribution oscillator.
//!
//! ```text
//! AD[t] = (high[t] - close[t-1]) / (high[t] - low[t])      t >= 1
//! ```
//!
//! A zero-range bar divides by the pseudo-zero. Row 0 has no previous close
//! and is absent.

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};
use crate::utils::guard_zero;

/// First defined position of the AD oscillator.
#[inline]
#[must_use]
pub const fn ad_oscillator_lookback() -> usize {
    1
}

/// Computes the accumulation/distribution oscillator.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series have different lengths.
///
/// # Example
///
/// ```
/// use daily_ta::indicators::ad_oscillator::ad_oscillator;
///
/// let high = vec![10.0_f64, 12.0];
/// let low = vec![8.0_f64, 8.0];
/// let close = vec![9.0_f64, 11.0];
///
/// let ad = ad_oscillator(&high, &low, &close).unwrap();
/// assert_eq!(ad, vec![None, Some(0.75)]);
/// ```
pub fn ad_oscillator<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<Option<T>>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;

    let mut result = vec![None; close.len()];
    for i in ad_oscillator_lookback()..close.len() {
        result[i] = Some((high[i] - close[i - 1]) / guard_zero(high[i] - low[i]));
    }
    Ok(result)
}
