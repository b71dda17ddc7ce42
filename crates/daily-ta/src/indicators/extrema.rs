//! Rolling week high and week low.
//!
//! A span of `W` weeks is converted to `5 × W` trading days; the highest high
//! (lowest low) of the trailing window is first defined once that many rows
//! have accumulated.

use crate::error::{Error, Result};
use crate::kernels::{rolling_max, rolling_min};
use crate::traits::{validate_period, SeriesElement};

/// Trading days per week.
pub const TRADING_DAYS_PER_WEEK: usize = 5;

/// Converts a week count into trading days.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the day count does not fit in `usize`.
#[inline]
pub const fn weeks_to_days(weeks: usize) -> Result<usize> {
    match weeks.checked_mul(TRADING_DAYS_PER_WEEK) {
        Some(days) => Ok(days),
        None => Err(Error::InvalidPeriod {
            period: weeks,
            reason: "week count overflows the trading day count",
        }),
    }
}

/// First defined position of a `weeks`-week rolling high or low.
#[inline]
#[must_use]
pub const fn week_extrema_lookback(weeks: usize) -> usize {
    weeks.saturating_mul(TRADING_DAYS_PER_WEEK).saturating_sub(1)
}

/// Highest high over the trailing `5 × weeks` rows.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `weeks` is zero or too large to
/// express in days.
///
/// # Example
///
/// ```
/// use daily_ta::indicators::extrema::week_high;
///
/// let high: Vec<f64> = (1..=6).map(f64::from).collect();
/// let result = week_high(&high, 1).unwrap();
/// assert_eq!(result[3], None);
/// assert_eq!(result[4], Some(5.0));
/// assert_eq!(result[5], Some(6.0));
/// ```
pub fn week_high<T: SeriesElement>(high: &[T], weeks: usize) -> Result<Vec<Option<T>>> {
    validate_period(weeks)?;
    rolling_max(high, weeks_to_days(weeks)?)
}

/// Lowest low over the trailing `5 × weeks` rows.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `weeks` is zero or too large to
/// express in days.
pub fn week_low<T: SeriesElement>(low: &[T], weeks: usize) -> Result<Vec<Option<T>>> {
    validate_period(weeks)?;
    rolling_min(low, weeks_to_days(weeks)?)
}
