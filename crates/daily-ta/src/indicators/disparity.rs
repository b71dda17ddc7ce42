//! Disparity: close relative to its moving average.
//!
//! `DISP[t] = close[t] / MA_N[t]`, sharing the moving average's warm-up.

use crate::error::Result;
use crate::indicators::moving_average::{moving_average, moving_average_lookback};
use crate::traits::{validate_lengths, validate_period, SeriesElement};

/// First defined position of `period`-row disparity.
#[inline]
#[must_use]
pub const fn disparity_lookback(period: usize) -> usize {
    moving_average_lookback(period)
}

/// Computes disparity, computing the moving average privately.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use daily_ta::indicators::disparity::disparity;
///
/// let close = vec![10.0_f64, 10.0, 10.0, 10.0];
/// let disp = disparity(&close, 2).unwrap();
/// assert_eq!(disp, vec![None, Some(1.0), Some(1.0), Some(1.0)]);
/// ```
pub fn disparity<T: SeriesElement>(close: &[T], period: usize) -> Result<Vec<Option<T>>> {
    let ma = moving_average(close, period)?;
    disparity_from_ma(close, &ma, period)
}

/// Computes disparity from a precomputed moving average.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - `close` and `ma` differ in length (`Error::LengthMismatch`)
pub fn disparity_from_ma<T: SeriesElement>(
    close: &[T],
    ma: &[Option<T>],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    validate_lengths(&[("close", close.len()), ("moving average", ma.len())])?;

    let mut result = vec![None; close.len()];
    for i in disparity_lookback(period)..close.len() {
        result[i] = ma[i].map(|m| close[i] / m);
    }
    Ok(result)
}
