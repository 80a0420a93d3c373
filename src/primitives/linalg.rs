//! Transpose, determinant, cofactor matrix and inverse.
//!
//! Determinant and cofactors use Laplace (cofactor) expansion, which is
//! exponential in `n`. The type targets small matrices; callers bound `n`.

use super::{Matrix, EPS};
use crate::error::{MatrixError, Result};

impl Matrix {
    /// Transposes the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2*3=6 elements");
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = self.at(i, j);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Returns the `(n-1)x(n-1)` matrix left after deleting `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input, `InvalidArgument` if the
    /// matrix is smaller than `2x2`, or `OutOfRange` for bad indices.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.check_square()?;
        if self.rows() < 2 {
            return Err(MatrixError::InvalidArgument {
                param: "size".to_string(),
                value: self.rows().to_string(),
                constraint: ">=2 to take a minor".to_string(),
            });
        }
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::out_of_range(row, col, self.shape()));
        }
        Ok(self.minor_unchecked(row, col))
    }

    /// Computes the determinant.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input and `InvalidArgument` for the
    /// `0x0` matrix.
    pub fn determinant(&self) -> Result<f64> {
        self.check_square()?;
        Ok(self.laplace_det())
    }

    /// Computes the cofactor matrix: `(-1)^(i+j) * det(minor(i, j))` at each
    /// `(i, j)`.
    ///
    /// A `1x1` matrix has no minors, so it is rejected with
    /// `InvalidArgument`; [`Matrix::inverse_matrix`] handles that size
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input, `InvalidArgument` for `0x0`
    /// or `1x1` input.
    pub fn calc_complements(&self) -> Result<Self> {
        self.check_square()?;
        let n = self.rows();
        if n == 1 {
            return Err(MatrixError::InvalidArgument {
                param: "size".to_string(),
                value: "1".to_string(),
                constraint: ">=2 for cofactor matrix".to_string(),
            });
        }

        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(sign(i + j) * self.minor_unchecked(i, j).laplace_det());
            }
        }
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Computes the inverse as the adjugate scaled by `1 / det`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input, `InvalidArgument` for `0x0`
    /// input, and `SingularMatrix` when `|det| <= EPS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("2*2=4 elements");
    /// let inv = m.inverse_matrix().expect("det = 10");
    /// let expected = Matrix::from_vec(2, 2, vec![0.6, -0.7, -0.2, 0.4]).expect("2*2=4 elements");
    /// assert_eq!(inv, expected);
    /// ```
    pub fn inverse_matrix(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.abs() <= EPS {
            return Err(MatrixError::SingularMatrix { det });
        }
        log::debug!("inverting {}x{} matrix, det = {det}", self.rows(), self.cols());

        if self.rows() == 1 {
            return Ok(Matrix::from_parts(1, 1, vec![1.0 / det]));
        }

        let mut adjugate = self.calc_complements()?.transpose();
        adjugate.mul_number(1.0 / det);
        Ok(adjugate)
    }

    fn check_square(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MatrixError::empty_input("matrix"));
        }
        if !self.is_square() {
            return Err(MatrixError::not_square(self.shape()));
        }
        Ok(())
    }

    /// Square, non-empty input only.
    fn laplace_det(&self) -> f64 {
        let n = self.rows();
        log::trace!("laplace expansion at n = {n}");
        match n {
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            _ => (0..n)
                .map(|j| sign(j) * self.at(0, j) * self.minor_unchecked(0, j).laplace_det())
                .sum(),
        }
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let n = self.rows();
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for (i, r) in self.iter_rows().enumerate() {
            if i == row {
                continue;
            }
            data.extend(
                r.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v),
            );
        }
        Matrix::from_parts(n - 1, n - 1, data)
    }
}

fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
#[path = "linalg_tests.rs"]
mod tests;
