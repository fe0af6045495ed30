use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(doc)]
use crate::BoundedAverageQueue;

/// A snapshot of the state of a [`BoundedAverageQueue`], created by
/// [`BoundedAverageQueue::statistics`].
///
/// It is displayed as `average={average} length={length} capacity={capacity}`, which makes it
/// suitable for passing to a logger or a telemetry line as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStatistics {
    /// The average of the retained samples, 0 if there are none.
    pub average: f64,
    /// The number of retained samples.
    pub length: usize,
    /// The maximum number of samples the window retains.
    pub capacity: usize,
}

impl Display for WindowStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "average={} length={} capacity={}",
            self.average, self.length, self.capacity
        )
    }
}
