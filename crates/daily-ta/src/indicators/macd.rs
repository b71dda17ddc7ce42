//! Moving average convergence divergence.
//!
//! `MACD[t] = EMA_N1[t] - EMA_N2[t]`, defined once both averages are, which
//! is position `max(N1, N2) - 1`. The pair is taken as given: `N1` need not be
//! the shorter period, and swapping the pair negates the line.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::macd::macd;
//!
//! let close = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let line = macd(&close, 2, 3).unwrap();
//!
//! assert_eq!(line[1], None);
//! // EMA2 at row 2: (3 - 1.5) * 2/3 + 1.5 = 2.5, EMA3 seed: 2.0
//! assert!((line[2].unwrap() - 0.5).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::indicators::ema::exponential_moving_average;
use crate::traits::{validate_lengths, validate_period, SeriesElement};

/// First defined position of the `(fast, slow)` MACD line.
#[inline]
#[must_use]
pub const fn macd_lookback(fast: usize, slow: usize) -> usize {
    let longest = if fast > slow { fast } else { slow };
    longest.saturating_sub(1)
}

/// Computes the MACD line, running both EMAs privately.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if either period is zero.
pub fn macd<T: SeriesElement>(close: &[T], fast: usize, slow: usize) -> Result<Vec<Option<T>>> {
    let fast_ema = exponential_moving_average(close, fast)?;
    let slow_ema = exponential_moving_average(close, slow)?;
    macd_from_emas(&fast_ema, &slow_ema, fast, slow)
}

/// Computes the MACD line from two precomputed EMAs.
///
/// # Errors
///
/// Returns an error if:
/// - Either period is zero (`Error::InvalidPeriod`)
/// - The two EMA series differ in length (`Error::LengthMismatch`)
pub fn macd_from_emas<T: SeriesElement>(
    fast_ema: &[Option<T>],
    slow_ema: &[Option<T>],
    fast: usize,
    slow: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(fast)?;
    validate_period(slow)?;
    validate_lengths(&[("fast EMA", fast_ema.len()), ("slow EMA", slow_ema.len())])?;

    let mut result = vec![None; fast_ema.len()];
    for i in macd_lookback(fast, slow)..fast_ema.len() {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            result[i] = Some(f - s);
        }
    }
    Ok(result)
}
