use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Hyperparameters for a `Network::sgd` run.
///
/// # Fields
/// - `epochs`: full passes over the training data
/// - `mini_batch_size`: examples averaged per update; the last batch of an
///   epoch may be smaller
/// - `learning_rate`: step size `eta`; each update subtracts
///   `eta / batch_len` times the summed gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, mini_batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            learning_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.mini_batch_size == 0 {
            return Err(NetError::InvalidConfig("mini_batch_size must be at least 1"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidConfig("learning_rate must be positive and finite"));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(30, 10, 3.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_rejects_bad_hyperparameters() {
        assert!(TrainConfig::default().validate().is_ok());
        assert!(TrainConfig::new(1, 0, 1.0).validate().is_err());
        assert!(TrainConfig::new(1, 1, 0.0).validate().is_err());
        assert!(TrainConfig::new(1, 1, f64::NAN).validate().is_err());
    }
}
