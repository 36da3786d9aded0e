use crate::math::activation::{sigmoid, softplus};
use crate::prelude::Transform;
use log::trace;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Immutable holder of an input vector exposing the NTM mean and deviation
/// activations.
///
/// Inputs are not validated. NaN and infinite elements flow through the
/// formulas under IEEE-754 rules (`mean(+inf) = 1`, `mean(-inf) = 0`,
/// `mean(NaN) = NaN`) instead of being rejected.
///
/// Both transforms use the stable sigmoid/softplus rearrangements from
/// [`crate::math::activation`] rather than the literal formulas, so inputs
/// large enough to overflow `exp` still produce their asymptotic values.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorStatistics {
    data_in: Array1<f64>,
}

impl VectorStatistics {
    /// Builds an instance from a copy of `data_in`.
    pub fn new(data_in: &[f64]) -> Self {
        Self {
            data_in: Array1::from(data_in.to_vec()),
        }
    }

    pub fn data_in(&self) -> &Array1<f64> {
        &self.data_in
    }

    pub fn len(&self) -> usize {
        self.data_in.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_in.is_empty()
    }

    /// Element-wise `1 / (1 + 1 / exp(x))`, the logistic sigmoid.
    ///
    /// Every finite element lands in (0, 1), saturating at the ends once
    /// `|x|` exceeds ~37.
    pub fn mean(&self) -> Array1<f64> {
        trace!("mean over {} elements", self.data_in.len());
        self.data_in.mapv(sigmoid)
    }

    /// Element-wise `1 + ln(1 + exp(x))`, one plus softplus.
    ///
    /// Strictly increasing and above 1, approaching `x + 1` for large `x`.
    pub fn deviation(&self) -> Array1<f64> {
        trace!("deviation over {} elements", self.data_in.len());
        self.data_in.mapv(|x| 1.0 + softplus(x))
    }

    pub fn apply(&self, transform: Transform) -> Array1<f64> {
        match transform {
            Transform::Mean => self.mean(),
            Transform::Deviation => self.deviation(),
        }
    }

    /// Evaluates both transforms into a serializable report.
    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            input: self.data_in.to_vec(),
            mean: self.mean().to_vec(),
            deviation: self.deviation().to_vec(),
        }
    }
}

impl From<Vec<f64>> for VectorStatistics {
    fn from(data_in: Vec<f64>) -> Self {
        Self {
            data_in: Array1::from(data_in),
        }
    }
}

impl From<Array1<f64>> for VectorStatistics {
    fn from(data_in: Array1<f64>) -> Self {
        Self { data_in }
    }
}

/// Both transforms of one input, as handed to downstream addressing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub input: Vec<f64>,
    pub mean: Vec<f64>,
    pub deviation: Vec<f64>,
}

impl StatisticsReport {
    pub fn values(&self, transform: Transform) -> &[f64] {
        match transform {
            Transform::Mean => &self.mean,
            Transform::Deviation => &self.deviation,
        }
    }
}
