use std::cell::Cell;
use std::collections::VecDeque;
use std::num::NonZero;

use log::debug;
use log::trace;
use num::cast::AsPrimitive;

use crate::bounded_average_assert_advanced;
use crate::bounded_average_assert_moderate;
use crate::bounded_average_assert_simple;
use crate::BoundedAverageOptions;
use crate::MovingAverageError;
use crate::WindowStatistics;

/// Upper bound on the number of slots reserved up-front; larger windows grow on demand.
const MAX_PREALLOCATED_SAMPLES: usize = 4096;

/// A simple moving average over the `capacity` most recently pushed samples.
///
/// Pushing into a full window evicts the oldest sample. The average is not maintained on every
/// push; instead, a push marks the cached average as dirty and it is recomputed from the retained
/// samples the next time [`BoundedAverageQueue::value`] is called.
///
/// The cache is updated through a shared reference, which means that the queue is not [`Sync`];
/// sharing it between threads requires wrapping the whole queue in a lock.
///
/// # Example
/// ```
/// # use std::num::NonZero;
/// # use bounded_average::BoundedAverageQueue;
/// let mut queue = BoundedAverageQueue::new(NonZero::new(3).unwrap());
/// queue.extend([1.0, 2.0, 3.0, 4.0]);
///
/// assert_eq!(queue.value(), 3.0);
/// assert_eq!(queue.front(), Ok(2.0));
/// assert_eq!(*queue.queue(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedAverageQueue<Term = f64> {
    /// The maximum number of samples which are retained; fixed at construction.
    capacity: usize,
    /// The retained samples, the oldest one at the front.
    samples: VecDeque<Term>,
    /// The average of `samples`; only valid if `is_dirty` is false.
    cached_average: Cell<f64>,
    is_dirty: Cell<bool>,
}

impl<Term> BoundedAverageQueue<Term> {
    /// Creates an empty queue which retains at most `capacity` samples.
    pub fn new(capacity: NonZero<usize>) -> BoundedAverageQueue<Term> {
        let capacity = capacity.get();
        BoundedAverageQueue {
            capacity,
            samples: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED_SAMPLES)),
            cached_average: Cell::new(0.0),
            is_dirty: Cell::new(false),
        }
    }

    /// Creates an empty queue which retains at most `capacity` samples.
    ///
    /// Returns [`MovingAverageError::InvalidCapacity`] if `capacity` is 0.
    pub fn try_new(capacity: usize) -> Result<BoundedAverageQueue<Term>, MovingAverageError> {
        NonZero::new(capacity)
            .map(BoundedAverageQueue::new)
            .ok_or(MovingAverageError::InvalidCapacity)
    }

    /// Creates an empty queue configured by the provided [`BoundedAverageOptions`].
    pub fn with_options(
        options: BoundedAverageOptions,
    ) -> Result<BoundedAverageQueue<Term>, MovingAverageError> {
        BoundedAverageQueue::try_new(options.capacity)
    }

    /// Adds `value` as the newest sample; if the window is full then the oldest sample is evicted
    /// first.
    pub fn push(&mut self, value: Term) {
        bounded_average_assert_simple!(self.samples.len() <= self.capacity);

        if self.samples.len() == self.capacity {
            let _ = self.samples.pop_front();
            trace!("Evicted the oldest sample of a window of size {}", self.capacity);
        }
        self.samples.push_back(value);
        self.is_dirty.set(true);

        bounded_average_assert_moderate!(self.samples.len() <= self.capacity);
    }

    /// The number of samples which are currently retained.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The maximum number of samples which can be retained; this never changes.
    pub fn max_len(&self) -> usize {
        self.capacity
    }

    /// The retained samples, oldest first.
    pub fn queue(&self) -> &VecDeque<Term> {
        &self.samples
    }

    /// Removes all samples and resets the average to 0.
    pub fn clear(&mut self) {
        debug!(
            "Clearing {} samples from a window of size {}",
            self.samples.len(),
            self.capacity
        );
        self.samples.clear();
        self.cached_average.set(0.0);
        self.is_dirty.set(false);
    }
}

impl<Term: Copy> BoundedAverageQueue<Term> {
    /// Returns the oldest retained sample, or [`MovingAverageError::EmptyQueue`] if there is
    /// none.
    pub fn front(&self) -> Result<Term, MovingAverageError> {
        self.samples
            .front()
            .copied()
            .ok_or(MovingAverageError::EmptyQueue)
    }
}

impl<Term: AsPrimitive<f64>> BoundedAverageQueue<Term> {
    /// Returns the average of the retained samples; in case there are no samples, the convention
    /// is to return 0.
    ///
    /// The average is only recomputed if a sample has been pushed since the last call.
    pub fn value(&self) -> f64 {
        if self.is_dirty.get() {
            let average = self.compute_average();
            trace!("Recomputed the average of {} samples: {average}", self.len());

            self.cached_average.set(average);
            self.is_dirty.set(false);
        }

        bounded_average_assert_advanced!(
            self.cached_average.get().to_bits() == self.compute_average().to_bits()
        );
        self.cached_average.get()
    }

    /// Returns a snapshot of the current average, length and capacity of the window.
    pub fn statistics(&self) -> WindowStatistics {
        WindowStatistics {
            average: self.value(),
            length: self.len(),
            capacity: self.max_len(),
        }
    }

    fn compute_average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.samples.iter().map(|&sample| sample.as_()).sum();
        sum / self.samples.len() as f64
    }
}

impl<Term> Extend<Term> for BoundedAverageQueue<Term> {
    fn extend<Samples: IntoIterator<Item = Term>>(&mut self, samples: Samples) {
        for sample in samples {
            self.push(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::BoundedAverageQueue;
    use crate::BoundedAverageOptions;
    use crate::MovingAverageError;

    fn queue_with_capacity(capacity: usize) -> BoundedAverageQueue {
        BoundedAverageQueue::try_new(capacity).expect("non-zero capacity")
    }

    #[test]
    fn test_empty() {
        let queue = queue_with_capacity(10);

        assert_eq!(queue.value(), 0.0);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.max_len(), 10);
        assert_eq!(queue.front(), Err(MovingAverageError::EmptyQueue));
    }

    #[test]
    fn test_constant_value() {
        let constant_value = 100.0;
        let mut queue = queue_with_capacity(5);
        for _i in 0..1000 {
            queue.push(constant_value);
            assert_eq!(queue.value(), constant_value);
        }
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn test_simple1() {
        let mut queue = queue_with_capacity(2);
        queue.push(10.0);
        assert_eq!(queue.value(), 10.0);
        queue.push(30.0);
        assert_eq!(queue.value(), 20.0);
        queue.push(30.0);
        assert_eq!(queue.value(), 30.0);
        queue.push(10.0);
        assert_eq!(queue.value(), 20.0);
        queue.push(90.0);
        assert_eq!(queue.value(), 50.0);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result: Result<BoundedAverageQueue, _> = BoundedAverageQueue::try_new(0);
        assert_eq!(result.unwrap_err(), MovingAverageError::InvalidCapacity);

        let result: Result<BoundedAverageQueue, _> =
            BoundedAverageQueue::with_options(BoundedAverageOptions { capacity: 0 });
        assert_eq!(result.unwrap_err(), MovingAverageError::InvalidCapacity);
    }

    #[test]
    fn default_options_are_accepted() {
        let queue: BoundedAverageQueue =
            BoundedAverageQueue::with_options(BoundedAverageOptions::default())
                .expect("default capacity is non-zero");

        assert_eq!(queue.max_len(), 20);
    }

    #[test]
    fn push_marks_the_average_as_dirty() {
        let mut queue = queue_with_capacity(3);
        assert!(!queue.is_dirty.get());

        queue.push(1.0);
        assert!(queue.is_dirty.get());

        let _ = queue.value();
        assert!(!queue.is_dirty.get());

        queue.push(2.0);
        queue.push(3.0);
        assert!(queue.is_dirty.get());
        assert_eq!(queue.value(), 2.0);
    }

    #[test]
    fn repeated_reads_return_the_cached_value() {
        let mut queue = queue_with_capacity(4);
        queue.extend([0.1, 0.2, 0.7]);

        let first = queue.value();
        assert!(!queue.is_dirty.get());
        let second = queue.value();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(queue.cached_average.get().to_bits(), first.to_bits());
    }

    #[test]
    fn clear_resets_to_a_clean_empty_window() {
        let mut queue = queue_with_capacity(3);
        queue.extend([4.0, 5.0, 6.0, 7.0]);

        queue.clear();
        assert!(!queue.is_dirty.get());
        assert_eq!(queue.value(), 0.0);
        assert!(queue.queue().is_empty());
        assert_eq!(queue.max_len(), 3);

        // Clearing twice results in the same state
        queue.clear();
        assert_eq!(queue.value(), 0.0);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn integer_samples_are_averaged_as_floats() {
        let mut queue: BoundedAverageQueue<u32> =
            BoundedAverageQueue::new(NonZero::new(4).unwrap());
        queue.extend([1, 2, 3, 4, 5]);

        assert_eq!(queue.value(), 3.5);
        assert_eq!(queue.front(), Ok(2));
    }

    #[test]
    fn window_of_one_keeps_only_the_latest_sample() {
        let mut queue = queue_with_capacity(1);
        for sample in [3.0, -1.0, 8.5] {
            queue.push(sample);
            assert_eq!(queue.value(), sample);
            assert_eq!(queue.front(), Ok(sample));
            assert_eq!(queue.len(), 1);
        }
    }

    #[test]
    fn statistics_reflect_the_current_window() {
        let mut queue = queue_with_capacity(4);
        queue.extend([1.0, 2.0]);

        let statistics = queue.statistics();
        assert_eq!(statistics.average, 1.5);
        assert_eq!(statistics.length, 2);
        assert_eq!(statistics.capacity, 4);
        assert!(!queue.is_dirty.get());
    }
}
