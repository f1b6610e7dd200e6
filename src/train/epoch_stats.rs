use serde::{Deserialize, Serialize};

/// Per-epoch statistics returned by `Network::sgd`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Correctly classified test examples, if test data was supplied.
    pub correct: Option<usize>,
    pub test_size: Option<usize>,
    /// Wall-clock duration of the epoch, evaluation included.
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// Fraction of the test set classified correctly.
    pub fn accuracy(&self) -> Option<f64> {
        match (self.correct, self.test_size) {
            (Some(_), Some(0)) => Some(0.0),
            (Some(c), Some(n)) => Some(c as f64 / n as f64),
            _ => None,
        }
    }
}
