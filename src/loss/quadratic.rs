use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::math::vector;

/// Quadratic cost `½‖a − y‖²`, the cost the backward pass differentiates.
pub struct QuadraticCost;

impl QuadraticCost {
    pub fn cost(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        let diff = vector::subtract(predicted, expected)?;
        Ok(0.5 * vector::dot(&diff, &diff)?)
    }

    /// Gradient with respect to the output activations: `a − y`.
    pub fn derivative(output: &Matrix, target: &Matrix) -> Result<Matrix> {
        output.subtract(target)
    }
}
