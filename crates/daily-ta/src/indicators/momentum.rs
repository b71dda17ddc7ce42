//! Momentum.
//!
//! ```text
//! MOM[t] = close[t] - close[t - N]
//! ```
//!
//! The first value needs a close exactly `N` rows back, so positions
//! `0 .. N` are absent.

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// First defined position of `period`-row momentum.
#[inline]
#[must_use]
pub const fn momentum_lookback(period: usize) -> usize {
    period
}

/// Computes `period`-row momentum of `close`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use daily_ta::indicators::momentum::momentum;
///
/// let close = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0, 15.0];
/// let mom = momentum(&close, 3).unwrap();
/// assert_eq!(mom[2], None);
/// assert_eq!(mom[3], Some(3.0));
/// ```
pub fn momentum<T: SeriesElement>(close: &[T], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;

    let mut result = vec![None; close.len()];
    for i in momentum_lookback(period)..close.len() {
        result[i] = Some(close[i] - close[i - period]);
    }
    Ok(result)
}
