//! Elementwise operations over equal-length `f64` slices.
//!
//! Every function allocates and returns a fresh `Vec`; inputs are never
//! mutated.

use crate::error::{NetError, Result};

fn check_lengths(what: &'static str, a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(NetError::mismatch(what, a.len(), b.len()));
    }
    Ok(())
}

/// Sum of elementwise products. Zero for empty vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths("vector dot", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths("vector add", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths("vector subtract", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Elementwise (Hadamard) product.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths("vector hadamard", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

pub fn scalar_multiply(scalar: f64, vector: &[f64]) -> Vec<f64> {
    vector.iter().map(|x| x * scalar).collect()
}

pub fn map<F>(vector: &[f64], functor: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    vector.iter().map(|&x| functor(x)).collect()
}

/// Index of the largest element. Ties keep the earliest index; an empty
/// slice yields 0.
pub fn index_max(values: &[f64]) -> usize {
    let mut max = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[max] {
            max = i;
        }
    }
    max
}

/// One-hot encoding of `label` over `classes` positions.
pub fn one_hot(label: usize, classes: usize) -> Result<Vec<f64>> {
    if label >= classes {
        return Err(NetError::mismatch("one-hot label vs class count", label, classes));
    }
    Ok((0..classes).map(|i| if i == label { 1.0 } else { 0.0 }).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dot_sums_products() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn binary_ops_reject_length_mismatch() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0, 3.0];

        for result in [add(&a, &b), subtract(&a, &b), hadamard(&a, &b)] {
            match result {
                Err(NetError::DimensionMismatch { left, right, .. }) => {
                    assert_eq!((left, right), (2, 3));
                }
                other => panic!("expected a dimension mismatch, got {other:?}"),
            }
        }
        assert!(dot(&a, &b).is_err());
    }

    #[test]
    fn elementwise_ops() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(add(&a, &b).unwrap(), vec![5.0, 7.0, 9.0]);
        assert_eq!(subtract(&a, &b).unwrap(), vec![-3.0, -3.0, -3.0]);
        assert_eq!(hadamard(&a, &b).unwrap(), vec![4.0, 10.0, 18.0]);
        assert_eq!(scalar_multiply(2.0, &a), vec![2.0, 4.0, 6.0]);
        assert_eq!(map(&a, |x| x * x), vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn index_max_keeps_first_of_ties() {
        assert_eq!(index_max(&[0.1, 0.9, 0.9, 0.3]), 1);
        assert_eq!(index_max(&[0.5, 0.5]), 0);
        assert_eq!(index_max(&[-1.0, -0.5]), 1);
        assert_eq!(index_max(&[]), 0);
    }

    #[test]
    fn one_hot_marks_label() {
        assert_eq!(one_hot(2, 4).unwrap(), vec![0.0, 0.0, 1.0, 0.0]);
        assert!(one_hot(4, 4).is_err());
    }
}
