use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Names one of the two element-wise transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Mean,
    Deviation,
}

impl Transform {
    pub const ALL: [Transform; 2] = [Transform::Mean, Transform::Deviation];

    pub fn name(self) -> &'static str {
        match self {
            Transform::Mean => "mean",
            Transform::Deviation => "deviation",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common error type for fixture loading and verification.
///
/// The transforms themselves are infallible.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("reading fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{transform} length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        transform: Transform,
        expected: usize,
        actual: usize,
    },
    #[error(
        "{transform}[{index}] mismatch: expected {expected}, got {actual} (tolerance {tolerance})"
    )]
    ValueMismatch {
        transform: Transform,
        index: usize,
        expected: f64,
        actual: f64,
        tolerance: f64,
    },
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}

pub type StatsResult<T> = Result<T, StatsError>;
