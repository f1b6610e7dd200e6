use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::vector::one_hot;

/// An input paired with the full target output vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        TrainingExample { input, target }
    }

    /// Builds an example whose target is the one-hot encoding of `label`.
    pub fn labelled(input: Vec<f64>, label: usize, classes: usize) -> Result<Self> {
        Ok(TrainingExample {
            input,
            target: one_hot(label, classes)?,
        })
    }
}

/// An input paired with its expected class index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestExample {
    pub input: Vec<f64>,
    pub label: usize,
}

impl TestExample {
    pub fn new(input: Vec<f64>, label: usize) -> Self {
        TestExample { input, label }
    }
}
