use thiserror::Error;

#[cfg(doc)]
use crate::BoundedAverageQueue;

/// The errors which can be reported by a [`BoundedAverageQueue`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MovingAverageError {
    /// The front of the window was requested while no samples were retained.
    #[error("The front value cannot be read because the moving average queue is empty")]
    EmptyQueue,
    /// A window was requested which cannot hold a single sample.
    #[error("The capacity of a moving average window should be at least 1")]
    InvalidCapacity,
}
