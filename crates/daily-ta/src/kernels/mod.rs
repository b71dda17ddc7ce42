//! Windowing kernels shared by the indicator processors.
//!
//! - [`window`]: bounded FIFO buffer with mean, extrema and sample deviation
//! - [`rolling_extrema`]: monotonic-deque rolling max/min

pub mod rolling_extrema;
pub mod window;

pub use rolling_extrema::{rolling_max, rolling_min, MonotonicDeque};
pub use window::WindowBuffer;
