//! Relative Strength Index over intraday moves.
//!
//! # Algorithm
//!
//! Each row contributes one move: an *up* move `close - open` when
//! `open <= close`, otherwise a *down* move `open - close`. Both are stored as
//! non-negative magnitudes. From position `N - 1` onward
//!
//! ```text
//! RSI = 100 - 100 / (1 + mean(ups) / mean(downs))
//! ```
//!
//! with two substitutions: an empty down list becomes `[1e-7]`, an empty up
//! list becomes `[0]`. The result is always in `[0, 100)`.
//!
//! # Eviction policies
//!
//! Once more than `N` moves have been seen the oldest must leave. How it is
//! located is selected with [`RsiEviction`]:
//!
//! - [`RsiEviction::MatchValue`] looks the oldest magnitude up by value,
//!   first in the up list, then in the down list, and removes the *first*
//!   element of whichever list matched. Substituted placeholders stay in their
//!   list once inserted. When an up and a down move share a magnitude this can
//!   evict from the wrong side; the policy reproduces that output exactly.
//! - [`RsiEviction::Tagged`] keeps `(direction, magnitude)` pairs in a single
//!   `N`-move window, so the evicted move always leaves its own side.
//!   Placeholders apply only while a side is empty.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::rsi::{rsi, RsiEviction};
//!
//! let open = vec![10.0_f64, 11.0, 12.0, 11.0];
//! let close = vec![11.0_f64, 12.0, 11.0, 13.0];
//!
//! let result = rsi(&open, &close, 3, RsiEviction::Tagged).unwrap();
//! assert_eq!(result[1], None);
//! // window moves: up 1, up 1, down 1
//! assert!((result[2].unwrap() - 50.0).abs() < 1e-10);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::traits::{validate_period, validate_same_length, SeriesElement};

/// How the oldest move is removed from the RSI window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiEviction {
    /// Locate the oldest move by value membership.
    #[default]
    MatchValue,
    /// Track each move's direction explicitly.
    Tagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// First defined position of `period`-row RSI.
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
fn classify<T: SeriesElement>(open: T, close: T) -> (Direction, T) {
    if open <= close {
        (Direction::Up, close - open)
    } else {
        (Direction::Down, open - close)
    }
}

#[inline]
fn rsi_value<T: SeriesElement>(up_mean: T, down_mean: T) -> T {
    T::hundred() - T::hundred() / (T::one() + up_mean / down_mean)
}

fn mean<T: SeriesElement>(values: &[T]) -> Result<T> {
    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(sum / T::from_usize(values.len())?)
}

/// Computes `period`-row RSI from open/close moves.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - `open` and `close` differ in length (`Error::LengthMismatch`)
pub fn rsi<T: SeriesElement>(
    open: &[T],
    close: &[T],
    period: usize,
    eviction: RsiEviction,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    validate_same_length(&[("open", open), ("close", close)])?;

    match eviction {
        RsiEviction::MatchValue => rsi_match_value(open, close, period),
        RsiEviction::Tagged => rsi_tagged(open, close, period),
    }
}

fn rsi_match_value<T: SeriesElement>(open: &[T], close: &[T], period: usize) -> Result<Vec<Option<T>>> {
    let mut ups: Vec<T> = Vec::new();
    let mut downs: Vec<T> = Vec::new();
    let mut moves: VecDeque<T> = VecDeque::new();
    let mut result = vec![None; open.len()];

    for i in 0..open.len() {
        let (direction, magnitude) = classify(open[i], close[i]);
        match direction {
            Direction::Up => ups.push(magnitude),
            Direction::Down => downs.push(magnitude),
        }
        moves.push_back(magnitude);

        if i < rsi_lookback(period) {
            continue;
        }

        if moves.len() > period {
            if let Some(&oldest) = moves.front() {
                if ups.contains(&oldest) {
                    moves.pop_front();
                    ups.remove(0);
                } else if downs.contains(&oldest) {
                    moves.pop_front();
                    downs.remove(0);
                }
            }
        }

        if downs.is_empty() {
            downs.push(T::pseudo_zero());
        }
        if ups.is_empty() {
            ups.push(T::zero());
        }
        result[i] = Some(rsi_value(mean(&ups)?, mean(&downs)?));
    }
    Ok(result)
}

fn rsi_tagged<T: SeriesElement>(open: &[T], close: &[T], period: usize) -> Result<Vec<Option<T>>> {
    let mut window: VecDeque<(Direction, T)> = VecDeque::new();
    let mut result = vec![None; open.len()];

    for i in 0..open.len() {
        window.push_back(classify(open[i], close[i]));
        if window.len() > period {
            window.pop_front();
        }
        if i < rsi_lookback(period) {
            continue;
        }

        let (mut up_sum, mut up_count) = (T::zero(), 0_usize);
        let (mut down_sum, mut down_count) = (T::zero(), 0_usize);
        for &(direction, magnitude) in &window {
            match direction {
                Direction::Up => {
                    up_sum = up_sum + magnitude;
                    up_count += 1;
                }
                Direction::Down => {
                    down_sum = down_sum + magnitude;
                    down_count += 1;
                }
            }
        }

        let up_mean = if up_count == 0 {
            T::zero()
        } else {
            up_sum / T::from_usize(up_count)?
        };
        let down_mean = if down_count == 0 {
            T::pseudo_zero()
        } else {
            down_sum / T::from_usize(down_count)?
        };
        result[i] = Some(rsi_value(up_mean, down_mean));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, count_absent_prefix, EPSILON};

    #[test]
    fn test_all_up_moves_approach_hundred() {
        let open = vec![1.0_f64, 2.0, 3.0, 4.0];
        let close = vec![2.0_f64, 3.0, 4.0, 5.0];
        for eviction in [RsiEviction::MatchValue, RsiEviction::Tagged] {
            let result = rsi(&open, &close, 3, eviction).unwrap();
            assert_eq!(count_absent_prefix(&result), 2);
            for value in result.iter().flatten() {
                // 100 - 100 / (1 + 1 / 1e-7)
                assert!(*value > 99.99 && *value < 100.0);
            }
        }
    }

    #[test]
    fn test_all_down_moves_are_zero() {
        let open = vec![5.0_f64, 4.0, 3.0];
        let close = vec![4.0_f64, 3.0, 2.0];
        for eviction in [RsiEviction::MatchValue, RsiEviction::Tagged] {
            let result = rsi(&open, &close, 2, eviction).unwrap();
            assert_eq!(result[1], Some(0.0));
            assert_eq!(result[2], Some(0.0));
        }
    }

    #[test]
    fn test_policies_agree_without_ties() {
        let open = vec![10.0_f64, 10.5, 11.3, 10.9, 10.2, 10.8, 11.9];
        let close = vec![10.5_f64, 11.3, 10.9, 10.2, 10.8, 11.9, 11.0];
        let a = rsi(&open, &close, 3, RsiEviction::MatchValue).unwrap();
        let b = rsi(&open, &close, 3, RsiEviction::Tagged).unwrap();
        for (x, y) in a.iter().zip(&b) {
            match (x, y) {
                (Some(x), Some(y)) => assert!(approx_eq(*x, *y, EPSILON)),
                (None, None) => {}
                _ => panic!("warm-up differs"),
            }
        }
    }

    #[test]
    fn test_match_value_tie_evicts_from_up_list() {
        // moves: down 1, up 1, up 2, then up 3 forces an eviction of magnitude 1
        let open = vec![2.0_f64, 1.0, 1.0, 1.0];
        let close = vec![1.0_f64, 2.0, 3.0, 4.0];

        let matched = rsi(&open, &close, 3, RsiEviction::MatchValue).unwrap();
        // the oldest move (down 1) is found in ups first: ups [2, 3], downs [1]
        assert!(approx_eq(matched[3].unwrap(), 100.0 - 100.0 / (1.0 + 2.5), EPSILON));

        let tagged = rsi(&open, &close, 3, RsiEviction::Tagged).unwrap();
        // the down move leaves its own side: ups [1, 2, 3], downs empty
        assert!(approx_eq(tagged[3].unwrap(), 100.0 - 100.0 / (1.0 + 2.0 / 1e-7), EPSILON));
    }

    #[test]
    fn test_match_value_placeholder_persists() {
        // three up moves then one down move, period 2
        let open = vec![1.0_f64, 1.0, 1.0, 3.0];
        let close = vec![2.0_f64, 2.0, 2.0, 1.0];
        let result = rsi(&open, &close, 2, RsiEviction::MatchValue).unwrap();
        // row 3: downs holds the placeholder inserted at row 1 plus the real move
        // ups [1] after one eviction per row, downs [1e-7, 2]
        let down_mean = (1e-7 + 2.0) / 2.0;
        assert!(approx_eq(result[3].unwrap(), 100.0 - 100.0 / (1.0 + 1.0 / down_mean), EPSILON));
    }
}
