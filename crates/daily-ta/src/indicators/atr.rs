//! Average True Range.
//!
//! # Algorithm
//!
//! ```text
//! TR[t]  = max(high[t] - low[t], |low[t] - close[t-1]|, |high[t] - close[t-1]|)   t >= 1
//! ATR[t] = (mean(window) * (N - 1) + TR[t]) / N                                     t >= N
//! ```
//!
//! Row 0 has no previous close and contributes no true range, so the first
//! `N` samples are the true ranges of rows `1 ..= N` and ATR is first emitted
//! at position `N` (an N + 1 row warm-up). After each emission the ATR value
//! itself is pushed into the `N`-slot window, which is the bounded-mean
//! approximation of Wilder smoothing this engine reproduces. At position `N`
//! the current true range is both the newest window sample and the `TR[t]`
//! term.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::atr::{average_true_range, atr_lookback};
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 13.0];
//! let low = vec![9.0_f64, 10.0, 11.0, 12.0];
//! let close = vec![9.5_f64, 10.5, 11.5, 12.5];
//!
//! let atr = average_true_range(&high, &low, &close, 2).unwrap();
//! assert_eq!(atr_lookback(2), 2);
//! assert_eq!(atr[..2], [None, None]);
//! assert!(atr[2].is_some());
//! ```

use crate::error::Result;
use crate::kernels::WindowBuffer;
use crate::traits::{validate_period, validate_same_length, SeriesElement};

/// First defined position of a `period`-row ATR.
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period
}

/// True range of one row given the previous close.
#[inline]
#[must_use]
pub fn true_range<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    (high - low)
        .max((low - prev_close).abs())
        .max((high - prev_close).abs())
}

/// Computes the `period`-row average true range.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The series have different lengths (`Error::LengthMismatch`)
pub fn average_true_range<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;

    let period_t = T::from_usize(period)?;
    let carry = T::from_usize(period - 1)?;

    let mut window = WindowBuffer::new(period);
    let mut result = vec![None; close.len()];
    let mut prev_close = T::zero();
    for i in 0..close.len() {
        if i == 0 {
            prev_close = close[i];
            continue;
        }

        let tr = true_range(high[i], low[i], prev_close);
        if i < period {
            window.push(tr);
        } else {
            if i == period {
                window.push(tr);
            }
            let mean = window.mean().unwrap_or(tr);
            let atr = (mean * carry + tr) / period_t;
            result[i] = Some(atr);
            window.push(atr);
        }
        prev_close = close[i];
    }
    Ok(result)
}
