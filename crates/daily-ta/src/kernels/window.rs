//! Bounded FIFO window buffer.
//!
//! Every rolling processor keeps its recent history in a [`WindowBuffer`]
//! created fresh for one scan. Pushing into a full buffer evicts and returns
//! the oldest element, so callers never manage eviction by hand.
//!
//! # Example
//!
//! ```
//! use daily_ta::kernels::window::WindowBuffer;
//!
//! let mut window = WindowBuffer::new(3);
//! assert_eq!(window.push(1.0_f64), None);
//! window.push(2.0);
//! window.push(3.0);
//! assert!(window.is_full());
//!
//! // A fourth value pushes out the first.
//! assert_eq!(window.push(4.0), Some(1.0));
//! assert_eq!(window.front(), Some(2.0));
//! assert_eq!(window.mean(), Some(3.0));
//! ```

use std::collections::VecDeque;

use crate::traits::SeriesElement;

/// A fixed-capacity first-in-first-out buffer of recent observations.
#[derive(Debug, Clone)]
pub struct WindowBuffer<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T: SeriesElement> WindowBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` values.
    ///
    /// A capacity of zero is treated as one. Storage grows with the values
    /// pushed, so a capacity far beyond the input length costs nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the maximum number of values held.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of values currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the buffer holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true once the buffer holds `capacity` values.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Appends a value, evicting and returning the oldest one if the buffer
    /// was already full.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    /// Returns the oldest value.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.values.front().copied()
    }

    /// Returns the newest value.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<T> {
        self.values.back().copied()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Arithmetic mean of the held values, or `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let sum = self.values.iter().fold(T::zero(), |acc, &x| acc + x);
        let count = T::from_usize(self.values.len()).ok()?;
        Some(sum / count)
    }

    /// Largest held value, or `None` when empty.
    #[must_use]
    pub fn max(&self) -> Option<T> {
        self.values.iter().copied().reduce(|a, b| a.max(b))
    }

    /// Smallest held value, or `None` when empty.
    #[must_use]
    pub fn min(&self) -> Option<T> {
        self.values.iter().copied().reduce(|a, b| a.min(b))
    }

    /// Sample standard deviation (n - 1 denominator).
    ///
    /// Returns `None` with fewer than two values.
    #[must_use]
    pub fn sample_stddev(&self) -> Option<T> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        let mean = self.mean()?;
        let sum_sq = self
            .values
            .iter()
            .fold(T::zero(), |acc, &x| acc + (x - mean) * (x - mean));
        let denom = T::from_usize(n - 1).ok()?;
        Some((sum_sq / denom).sqrt())
    }

    /// Removes every held value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
