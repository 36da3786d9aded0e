use crate::prelude::StatsError;
use log::{debug, warn};

const TARGET: &str = "ntmstats";

/// Routes verification outcomes to the `log` facade under a shared target.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }

    pub fn record_failure(&self, case: &str, error: &StatsError) {
        warn!(target: TARGET, "reference case {} failed: {}", case, error);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
