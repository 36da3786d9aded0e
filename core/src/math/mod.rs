pub mod activation;
pub mod stats;

pub use activation::{sigmoid, softplus};
pub use stats::{StatisticsReport, VectorStatistics};
