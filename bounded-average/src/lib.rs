//! # Bounded average
//! A simple moving average over a bounded sliding window of numeric samples.
//!
//! The main structure is the [`BoundedAverageQueue`], which retains the most recently pushed
//! samples up to a fixed capacity and lazily recomputes their average when it is requested:
//! ```
//! # use bounded_average::BoundedAverageQueue;
//! # use bounded_average::MovingAverageError;
//! let mut queue: BoundedAverageQueue = BoundedAverageQueue::try_new(3)?;
//!
//! queue.push(1.0);
//! queue.push(2.0);
//! assert_eq!(queue.value(), 1.5);
//!
//! // The window is full after the third sample, the fourth one evicts the oldest sample.
//! queue.push(3.0);
//! queue.push(4.0);
//! assert_eq!(queue.value(), 3.0);
//! assert_eq!(queue.front()?, 2.0);
//!
//! queue.clear();
//! assert_eq!(queue.value(), 0.0);
//! assert_eq!(queue.front(), Err(MovingAverageError::EmptyQueue));
//! # Ok::<(), MovingAverageError>(())
//! ```
//!
//! A snapshot of the window for reporting is available through
//! [`BoundedAverageQueue::statistics`].
#[doc(hidden)]
pub mod asserts;
mod error;
pub mod moving_averages;
mod options;

pub use error::MovingAverageError;
pub use moving_averages::BoundedAverageQueue;
pub use moving_averages::WindowStatistics;
pub use options::BoundedAverageOptions;
pub use options::DEFAULT_WINDOW_CAPACITY;
