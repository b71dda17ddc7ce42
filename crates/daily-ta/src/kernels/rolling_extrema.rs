//! Rolling extrema using a monotonic deque.
//!
//! The deque holds row indices whose values are monotonically ordered
//! (decreasing for max, increasing for min), so the front is always the
//! extremum of the trailing window. Each row is pushed and popped at most
//! once, giving O(n) total work instead of O(n·k) for a window rescan.
//!
//! # Example
//!
//! ```
//! use daily_ta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max = rolling_max(&data, 3).unwrap();
//! assert_eq!(max[2], Some(4.0)); // max of [3, 1, 4]
//! assert_eq!(max[5], Some(9.0)); // max of [1, 5, 9]
//!
//! let min = rolling_min(&data, 3).unwrap();
//! assert_eq!(min[1], None);
//! assert_eq!(min[2], Some(1.0)); // min of [3, 1, 4]
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Max,
    Min,
}

/// A monotonic deque of indices for tracking a rolling extremum.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
    kind: Extremum,
}

impl MonotonicDeque {
    /// Creates a deque tracking the rolling maximum over `period` rows.
    #[must_use]
    pub fn max(period: usize) -> Self {
        Self::with_kind(period, Extremum::Max)
    }

    /// Creates a deque tracking the rolling minimum over `period` rows.
    #[must_use]
    pub fn min(period: usize) -> Self {
        Self::with_kind(period, Extremum::Min)
    }

    fn with_kind(period: usize, kind: Extremum) -> Self {
        Self {
            deque: VecDeque::new(),
            period: period.max(1),
            kind,
        }
    }

    /// Pushes row `index` of `data` and drops indices that left the window.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        while let Some(&back) = self.deque.back() {
            let dominated = match self.kind {
                Extremum::Max => value >= data[back],
                Extremum::Min => value <= data[back],
            };
            if dominated {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(index);

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while self.deque.front().is_some_and(|&front| front < window_start) {
                self.deque.pop_front();
            }
        }
    }

    /// Returns the current extremum, or `None` before the first push.
    #[inline]
    #[must_use]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> Option<T> {
        self.deque.front().map(|&idx| data[idx])
    }
}

fn rolling<T: SeriesElement>(data: &[T], period: usize, mut deque: MonotonicDeque) -> Vec<Option<T>> {
    let mut result = vec![None; data.len()];
    for i in 0..data.len() {
        deque.push(i, data);
        if i + 1 >= period {
            result[i] = deque.extremum(data);
        }
    }
    result
}

/// Computes the maximum of each trailing `period`-row window.
///
/// The first `period - 1` positions are absent.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    Ok(rolling(data, period, MonotonicDeque::max(period)))
}

/// Computes the minimum of each trailing `period`-row window.
///
/// The first `period - 1` positions are absent.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    Ok(rolling(data, period, MonotonicDeque::min(period)))
}
