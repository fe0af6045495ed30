mod bounded_average_queue;
mod window_statistics;

pub use bounded_average_queue::BoundedAverageQueue;
pub use window_statistics::WindowStatistics;
