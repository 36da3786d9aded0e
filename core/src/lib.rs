//! Vector statistics for NTM memory addressing.
//!
//! Provides the element-wise "mean" (logistic sigmoid) and "deviation"
//! (one plus softplus) activations consumed by the addressing controller,
//! along with reference fixtures for checking results within tolerance.

pub mod math;
pub mod prelude;
pub mod reference;
pub mod telemetry;

pub use math::{StatisticsReport, VectorStatistics};
pub use prelude::{StatsError, StatsResult, Transform};
pub use reference::ReferenceCase;
