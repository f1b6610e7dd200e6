use crate::error::{NetError, Result};
use crate::math::random::{standard_normal, RandomSource};
use crate::math::vector;

/// A dense, row-major, immutable matrix.
///
/// Every operation allocates a new `Matrix`. A matrix always has at least one
/// row and one column, and all rows share the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from its rows. Fails on zero rows, empty rows or
    /// ragged rows.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().ok_or(NetError::EmptyMatrix)?.len();
        if cols == 0 {
            return Err(NetError::EmptyMatrix);
        }
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NetError::mismatch("matrix row length", row.len(), cols));
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    /// A single-column matrix holding the elements of `vector`.
    pub fn from_vector(vector: &[f64]) -> Result<Matrix> {
        Ok(Matrix::from_data(vec![vector.to_vec()])?.transpose())
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(NetError::EmptyMatrix);
        }
        Ok(Matrix::filled(rows, cols))
    }

    /// Every entry drawn independently from N(0, 1).
    pub fn random<R: RandomSource + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
        let mut res = Matrix::zeros(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = standard_normal(rng);
            }
        }
        Ok(res)
    }

    // Callers guarantee non-zero dimensions.
    fn filled(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// A copy of the entries; mutating it never touches the matrix.
    pub fn elements(&self) -> Vec<Vec<f64>> {
        self.data.clone()
    }

    /// Consumes the matrix and hands back its rows.
    pub fn into_elements(self) -> Vec<Vec<f64>> {
        self.data
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::filled(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix product `self · rhs`.
    ///
    /// `rhs` is transposed once so that each entry is a dot product of two
    /// rows.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(NetError::mismatch(
                "matrix multiply (left cols vs right rows)",
                self.cols,
                rhs.rows,
            ));
        }

        let rhs_t = rhs.transpose();
        let data = self
            .data
            .iter()
            .map(|row| {
                rhs_t
                    .data
                    .iter()
                    .map(|col| vector::dot(row, col))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_rows("matrix add", rhs, vector::add)
    }

    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_rows("matrix subtract", rhs, vector::subtract)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_rows("matrix hadamard", rhs, vector::hadamard)
    }

    pub fn scalar_multiply(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| vector::scalar_multiply(scalar, row))
                .collect(),
        }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|row| vector::map(row, &functor)).collect(),
        }
    }

    /// Exact structural equality; `false` as soon as the shapes differ.
    pub fn are_equal(&self, other: &Matrix) -> bool {
        self == other
    }

    fn zip_rows<F>(&self, what: &'static str, rhs: &Matrix, op: F) -> Result<Matrix>
    where
        F: Fn(&[f64], &[f64]) -> Result<Vec<f64>>,
    {
        if self.rows != rhs.rows {
            return Err(NetError::mismatch(what, self.rows, rhs.rows));
        }
        if self.cols != rhs.cols {
            return Err(NetError::mismatch(what, self.cols, rhs.cols));
        }

        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| op(a.as_slice(), b.as_slice()))
            .collect::<Result<Vec<Vec<f64>>>>()?;

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data).unwrap()
    }

    fn identity(n: usize) -> Matrix {
        m((0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect())
    }

    #[test]
    fn multiply_scalar_like() {
        let res = m(vec![vec![2.0]]).multiply(&m(vec![vec![3.0]])).unwrap();
        assert_eq!(res.elements()[0][0], 6.0);
    }

    #[test]
    fn multiply_row_by_column() {
        let a = m(vec![vec![2.0, 3.0]]);
        let b = m(vec![vec![4.0], vec![6.0]]);
        assert!(a.multiply(&b).unwrap().are_equal(&m(vec![vec![26.0]])));
    }

    #[test]
    fn multiply_row_by_square() {
        let a = m(vec![vec![2.0, 3.0]]);
        let b = m(vec![vec![4.0, 7.0], vec![6.0, 9.0]]);
        assert_eq!(a.multiply(&b).unwrap().elements(), vec![vec![26.0, 41.0]]);
    }

    #[test]
    fn multiply_square() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 3.0]]);
        let b = m(vec![vec![5.0, 1.0], vec![3.0, 4.0]]);
        let expected = m(vec![vec![11.0, 9.0], vec![19.0, 14.0]]);
        assert!(a.multiply(&b).unwrap().are_equal(&expected));
    }

    #[test]
    fn multiply_rejects_incompatible_shapes() {
        let a = m(vec![vec![1.0, 2.0]]);
        match a.multiply(&a) {
            Err(NetError::DimensionMismatch { left, right, .. }) => assert_eq!((left, right), (2, 1)),
            other => panic!("expected a dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn add_elementwise() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 3.0]]);
        let b = m(vec![vec![5.0, 1.0], vec![3.0, 4.0]]);
        assert!(a.add(&b).unwrap().are_equal(&m(vec![vec![6.0, 3.0], vec![5.0, 7.0]])));

        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]);
        let b = m(vec![vec![0.0, 1.0, 3.0], vec![2.0, 4.0, 5.0], vec![6.0, 7.0, 8.0]]);
        let expected = m(vec![vec![1.0, 3.0, 6.0], vec![6.0, 9.0, 11.0], vec![13.0, 15.0, 17.0]]);
        assert!(a.add(&b).unwrap().are_equal(&expected));
    }

    #[test]
    fn elementwise_ops_require_equal_shapes() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0], vec![2.0]]);
        assert!(a.add(&b).is_err());
        assert!(a.subtract(&b).is_err());
        assert!(a.hadamard(&b).is_err());

        let c = m(vec![vec![1.0, 2.0, 3.0]]);
        assert!(a.add(&c).is_err());
    }

    #[test]
    fn subtract_hadamard_scale_map() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        assert_eq!(a.subtract(&b).unwrap().elements(), vec![vec![-1.0, 0.0], vec![1.0, 2.0]]);
        assert_eq!(a.hadamard(&b).unwrap().elements(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
        assert_eq!(a.scalar_multiply(0.5).elements(), vec![vec![0.5, 1.0], vec![1.5, 2.0]]);

        let doubled = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]).map(|n| n * 2.0);
        let expected = m(vec![vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0], vec![14.0, 16.0, 18.0]]);
        assert!(doubled.are_equal(&expected));
    }

    #[test]
    fn from_vector_is_a_column() {
        let col = Matrix::from_vector(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(col.elements(), vec![vec![1.0], vec![2.0], vec![3.0]]);
    }

    #[test]
    fn from_data_rejects_empty_and_ragged() {
        assert!(matches!(Matrix::from_data(vec![]), Err(NetError::EmptyMatrix)));
        assert!(matches!(Matrix::from_data(vec![vec![]]), Err(NetError::EmptyMatrix)));
        assert!(matches!(
            Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(NetError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn transpose_laws() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = Matrix::random(3, 4, &mut rng).unwrap();
        let b = Matrix::random(4, 2, &mut rng).unwrap();

        let at = a.transpose();
        assert_eq!(at.shape(), (4, 3));
        assert!(at.transpose().are_equal(&a));

        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab.shape(), (3, 2));
        let bt_at = b.transpose().multiply(&a.transpose()).unwrap();
        assert!(ab.transpose().are_equal(&bt_at));
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::random(3, 5, &mut StdRng::seed_from_u64(2)).unwrap();
        assert!(a.multiply(&identity(5)).unwrap().are_equal(&a));
    }

    #[test]
    fn are_equal_checks_shape_first() {
        let row = m(vec![vec![1.0, 2.0]]);
        assert!(!row.are_equal(&row.transpose()));
        assert!(!row.are_equal(&m(vec![vec![1.0, 2.000001]])));
    }

    #[test]
    fn elements_is_a_copy() {
        let a = m(vec![vec![1.0, 2.0]]);
        let mut copy = a.elements();
        copy[0][0] = 42.0;
        assert_eq!(a.elements()[0][0], 1.0);
    }

    #[test]
    fn zeros_and_random_shapes() {
        assert_eq!(Matrix::zeros(2, 3).unwrap().elements(), vec![vec![0.0; 3]; 2]);
        let r = Matrix::random(4, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(r.shape(), (4, 2));
        assert!(r.elements().iter().flatten().all(|x| x.is_finite()));
    }

    #[test]
    fn constructors_never_build_empty_matrices() {
        assert!(matches!(Matrix::from_vector(&[]), Err(NetError::EmptyMatrix)));
        assert!(matches!(Matrix::zeros(0, 3), Err(NetError::EmptyMatrix)));
        assert!(matches!(Matrix::zeros(3, 0), Err(NetError::EmptyMatrix)));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(Matrix::random(0, 2, &mut rng), Err(NetError::EmptyMatrix)));
        assert!(matches!(Matrix::random(2, 0, &mut rng), Err(NetError::EmptyMatrix)));
    }
}
