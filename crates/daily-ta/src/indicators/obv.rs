//! On-balance volume and its rolling standard deviation.
//!
//! # Algorithm
//!
//! OBV is a running sum starting from zero. Each row adds its volume when
//! `close >= open` and subtracts it otherwise, so the first value is already
//! defined at row 0:
//!
//! ```text
//! OBV[t] = OBV[t-1] + (close[t] >= open[t] ? volume[t] : -volume[t])     OBV[-1] = 0
//! ```
//!
//! The OBV standard deviation is the sample deviation of the trailing `N`
//! OBV values, first defined once `N` values have accumulated.
//!
//! Both processors need a volume series. At the frame level a missing Volume
//! column turns the whole family into a no-op.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::obv::obv;
//!
//! let open = vec![10.0_f64, 10.0, 11.0];
//! let close = vec![10.0_f64, 11.0, 10.5];
//! let volume = vec![100.0_f64, 150.0, 120.0];
//!
//! let result = obv(&open, &close, &volume).unwrap();
//! assert_eq!(result, vec![Some(100.0), Some(250.0), Some(130.0)]);
//! ```

use crate::error::Result;
use crate::kernels::WindowBuffer;
use crate::traits::{validate_period_at_least_two, validate_same_length, SeriesElement};

/// First defined position of OBV.
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// First defined position of the `period`-row OBV standard deviation.
#[inline]
#[must_use]
pub const fn obv_stddev_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes on-balance volume.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series have different lengths.
pub fn obv<T: SeriesElement>(open: &[T], close: &[T], volume: &[T]) -> Result<Vec<Option<T>>> {
    validate_same_length(&[("open", open), ("close", close), ("volume", volume)])?;

    let mut running = T::zero();
    Ok(open
        .iter()
        .zip(close)
        .zip(volume)
        .map(|((&o, &c), &v)| {
            running = if c >= o { running + v } else { running - v };
            Some(running)
        })
        .collect())
}

/// Computes the `period`-row sample standard deviation of OBV.
///
/// # Errors
///
/// Returns an error if:
/// - The period is below 2 (`Error::InvalidPeriod`)
/// - The series have different lengths (`Error::LengthMismatch`)
pub fn obv_stddev<T: SeriesElement>(
    open: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period_at_least_two(period)?;
    let obv = obv(open, close, volume)?;
    obv_stddev_from_obv(&obv, period)
}

/// Computes the `period`-row sample standard deviation of a precomputed OBV series.
///
/// Absent OBV entries are skipped rather than buffered.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is below 2.
pub fn obv_stddev_from_obv<T: SeriesElement>(obv: &[Option<T>], period: usize) -> Result<Vec<Option<T>>> {
    validate_period_at_least_two(period)?;

    let mut window = WindowBuffer::new(period);
    let mut result = vec![None; obv.len()];
    for (i, value) in obv.iter().enumerate() {
        let Some(value) = *value else { continue };
        window.push(value);
        if window.is_full() {
            result[i] = window.sample_stddev();
        }
    }
    Ok(result)
}
