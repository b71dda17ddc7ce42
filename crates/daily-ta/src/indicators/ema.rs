//! Exponential moving average of the close.
//!
//! # Algorithm
//!
//! ```text
//! EMA[N-1] = mean(close[0 ..= N-1])                 (seed)
//! EMA[t]   = (close[t] - EMA[t-1]) * 2/(N+1) + EMA[t-1]   for t >= N
//! ```
//!
//! Seeding with the simple mean of the first `N` closes, rather than a single
//! price, smooths the start of the series. Positions `0 .. N-1` are absent.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::ema::exponential_moving_average;
//!
//! let close = vec![2.0_f64, 4.0, 6.0, 8.0];
//! let ema = exponential_moving_average(&close, 3).unwrap();
//!
//! assert_eq!(ema[1], None);
//! assert_eq!(ema[2], Some(4.0));        // seed: (2 + 4 + 6) / 3
//! assert_eq!(ema[3], Some(6.0));        // (8 - 4) * 0.5 + 4
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// First defined position of a `period`-row EMA.
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the `period`-row exponential moving average of `close`.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The period cannot be represented in `T` (`Error::NumericConversion`)
pub fn exponential_moving_average<T: SeriesElement>(
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;

    let period_t = T::from_usize(period)?;
    let multiplier = T::two() / (period_t + T::one());

    let mut result = vec![None; close.len()];
    let mut seed_sum = T::zero();
    let mut ema = T::zero();
    for (i, &c) in close.iter().enumerate() {
        if i + 1 < period {
            seed_sum = seed_sum + c;
        } else if i + 1 == period {
            seed_sum = seed_sum + c;
            ema = seed_sum / period_t;
            result[i] = Some(ema);
        } else {
            ema = (c - ema) * multiplier + ema;
            result[i] = Some(ema);
        }
    }
    Ok(result)
}
