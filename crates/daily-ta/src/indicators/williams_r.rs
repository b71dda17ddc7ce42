//! Williams %R.
//!
//! # Algorithm
//!
//! The processor keeps the High and Low of the previous `N` rows (the current
//! row is appended only after it has been evaluated). From position `N - 1`
//! onward it emits
//!
//! ```text
//! %R[t] = (H0 - close[t]) / (H0 - L0)
//! ```
//!
//! where `H0` and `L0` are the *oldest* high and low still held in the
//! buffer, not the window's max and min. A zero `H0 - L0` is replaced by the
//! pseudo-zero. Because the buffer is one row short at position `N - 1`, the
//! period must be at least 2.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::williams_r::williams_r;
//!
//! let high = vec![12.0_f64, 15.0, 14.0, 13.0];
//! let low = vec![8.0_f64, 11.0, 10.0, 9.0];
//! let close = vec![10.0_f64, 14.0, 11.0, 12.0];
//!
//! let wr = williams_r(&high, &low, &close, 3).unwrap();
//! assert_eq!(wr[1], None);
//! // buffer holds rows 0..=1, oldest is row 0: (12 - 11) / (12 - 8)
//! assert_eq!(wr[2], Some(0.25));
//! ```

use crate::error::Result;
use crate::kernels::WindowBuffer;
use crate::traits::{validate_period_at_least_two, validate_same_length, SeriesElement};
use crate::utils::guard_zero;

/// First defined position of `period`-row Williams %R.
#[inline]
#[must_use]
pub const fn williams_r_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes Williams %R against the oldest buffered high and low.
///
/// # Errors
///
/// Returns an error if:
/// - The period is below 2 (`Error::InvalidPeriod`)
/// - The series have different lengths (`Error::LengthMismatch`)
pub fn williams_r<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period_at_least_two(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;

    let mut highs = WindowBuffer::new(period);
    let mut lows = WindowBuffer::new(period);
    let mut result = vec![None; close.len()];
    for i in 0..close.len() {
        if i >= williams_r_lookback(period) {
            if let (Some(h0), Some(l0)) = (highs.front(), lows.front()) {
                result[i] = Some((h0 - close[i]) / guard_zero(h0 - l0));
            }
        }
        highs.push(high[i]);
        lows.push(low[i]);
    }
    Ok(result)
}
