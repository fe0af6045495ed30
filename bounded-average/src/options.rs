#[cfg(doc)]
use crate::BoundedAverageQueue;

/// The number of samples retained by a window created from [`BoundedAverageOptions::default`].
pub const DEFAULT_WINDOW_CAPACITY: usize = 20;

/// The options which are used to create a [`BoundedAverageQueue`] using
/// [`BoundedAverageQueue::with_options`].
///
/// # Example
/// ```
/// # use bounded_average::BoundedAverageOptions;
/// # use bounded_average::BoundedAverageQueue;
/// let options = BoundedAverageOptions { capacity: 5 };
/// let queue: BoundedAverageQueue =
///     BoundedAverageQueue::with_options(options).expect("non-zero capacity");
///
/// assert_eq!(queue.max_len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct BoundedAverageOptions {
    /// The maximum number of samples which are retained in the window; once the window is full,
    /// pushing a new sample evicts the oldest one.
    #[cfg_attr(
        feature = "clap",
        arg(long = "window-capacity", default_value_t = DEFAULT_WINDOW_CAPACITY)
    )]
    pub capacity: usize,
}

impl Default for BoundedAverageOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}
