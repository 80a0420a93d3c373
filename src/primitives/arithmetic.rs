//! Element-wise arithmetic, scalar scaling and matrix product.
//!
//! The named methods are fallible and mutate in place. The operator impls
//! are layered on top of them and panic with the error message on shape
//! mismatch, the way slice indexing panics on a bad index.

use super::Matrix;
use crate::error::{MatrixError, Result};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl Matrix {
    /// Adds another matrix element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn sum_matrix(&mut self, other: &Self) -> Result<()> {
        self.zip_apply(other, |a, b| a + b)
    }

    /// Subtracts another matrix element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn sub_matrix(&mut self, other: &Self) -> Result<()> {
        self.zip_apply(other, |a, b| a - b)
    }

    /// Multiplies each element by a scalar, in place.
    pub fn mul_number(&mut self, num: f64) {
        for x in self.data_mut() {
            *x *= num;
        }
    }

    /// Replaces `self` with the product `self x other`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn mul_matrix(&mut self, other: &Self) -> Result<()> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{} rows", self.cols()),
                actual: format!("{}x{}", other.rows(), other.cols()),
            });
        }

        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let mut result = vec![0.0; n * p];
        for i in 0..n {
            for j in 0..p {
                let mut sum = 0.0;
                for k in 0..m {
                    sum += self.at(i, k) * other.at(k, j);
                }
                result[i * p + j] = sum;
            }
        }

        *self = Matrix::from_parts(n, p, result);
        Ok(())
    }

    fn zip_apply(&mut self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(self.shape(), other.shape()));
        }
        for (a, &b) in self.data_mut().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        Ok(())
    }
}

/// Returns `num * matrix` as a new matrix.
///
/// Same result as `matrix * num`.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{scale, Matrix};
///
/// let m = Matrix::from_vec(1, 2, vec![1.0, 2.0]).expect("1*2=2 elements");
/// assert_eq!(scale(3.0, &m), &m * 3.0);
/// ```
#[must_use]
pub fn scale(num: f64, matrix: &Matrix) -> Matrix {
    let mut out = matrix.clone();
    out.mul_number(num);
    out
}

fn unwrap_or_panic(result: Result<()>) {
    if let Err(e) = result {
        panic!("{e}");
    }
}

// Compound assignment carries the logic; binary operators clone (or reuse an
// owned left operand) and delegate to it.
macro_rules! matrix_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        impl $OpAssign<&Matrix> for Matrix {
            fn $op_assign(&mut self, rhs: &Matrix) {
                unwrap_or_panic(self.$method(rhs));
            }
        }

        impl $OpAssign<Matrix> for Matrix {
            fn $op_assign(&mut self, rhs: Matrix) {
                unwrap_or_panic(self.$method(&rhs));
            }
        }

        impl $Op<&Matrix> for &Matrix {
            type Output = Matrix;

            fn $op(self, rhs: &Matrix) -> Matrix {
                let mut out = self.clone();
                out.$op_assign(rhs);
                out
            }
        }

        impl $Op<Matrix> for &Matrix {
            type Output = Matrix;

            fn $op(self, rhs: Matrix) -> Matrix {
                self.$op(&rhs)
            }
        }

        impl $Op<&Matrix> for Matrix {
            type Output = Matrix;

            fn $op(mut self, rhs: &Matrix) -> Matrix {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<Matrix> for Matrix {
            type Output = Matrix;

            fn $op(mut self, rhs: Matrix) -> Matrix {
                self.$op_assign(&rhs);
                self
            }
        }
    };
}

matrix_binop!(Add, add, AddAssign, add_assign, sum_matrix);
matrix_binop!(Sub, sub, SubAssign, sub_assign, sub_matrix);
matrix_binop!(Mul, mul, MulAssign, mul_assign, mul_matrix);

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, num: f64) {
        self.mul_number(num);
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, num: f64) -> Matrix {
        self.mul_number(num);
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, num: f64) -> Matrix {
        scale(num, self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        matrix * self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        scale(self, matrix)
    }
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
