//! Error types for matrix operations.
//!
//! Every fallible operation returns before touching the receiver, so an
//! `Err` never leaves a half-updated matrix behind.

use thiserror::Error;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrixError;
///
/// let err = MatrixError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "2x4".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A dimension or other argument is outside its allowed domain.
    #[error("Invalid argument: {param} = {value}, expected {constraint}")]
    InvalidArgument {
        /// Argument name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Element index outside the matrix bounds.
    #[error("Index out of range: ({row}, {col}) for {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Operand shapes are incompatible.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    #[error("Singular matrix detected: determinant = {det}, cannot invert")]
    SingularMatrix {
        /// Determinant value (close to zero)
        det: f64,
    },
}

impl MatrixError {
    /// Create an invalid-argument error for a zero dimension.
    #[must_use]
    pub fn invalid_dimension(param: &str, value: usize) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: ">0".to_string(),
        }
    }

    /// Create an out-of-range error for an element index.
    #[must_use]
    pub fn out_of_range(row: usize, col: usize, shape: (usize, usize)) -> Self {
        Self::OutOfRange {
            row,
            col,
            rows: shape.0,
            cols: shape.1,
        }
    }

    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an invalid-argument error for an operation on a `0x0` matrix.
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidArgument {
            param: context.to_string(),
            value: "0x0".to_string(),
            constraint: "non-empty matrix".to_string(),
        }
    }

    /// Create a not-square error from a shape.
    #[must_use]
    pub fn not_square(shape: (usize, usize)) -> Self {
        Self::NotSquare {
            rows: shape.0,
            cols: shape.1,
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrixError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = MatrixError::invalid_dimension("rows", 0);
        let msg = err.to_string();
        assert!(msg.contains("Invalid argument"));
        assert!(msg.contains("rows = 0"));
        assert!(msg.contains(">0"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = MatrixError::out_of_range(5, 7, (3, 5));
        assert_eq!(err, "Index out of range: (5, 7) for 3x5 matrix");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrixError::dimension_mismatch((2, 3), (2, 4));
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("2x4"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrixError::not_square((2, 3));
        assert_eq!(err, "Matrix is not square: 2x3");
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = MatrixError::SingularMatrix { det: 1e-15 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains("0.000000000000001") || msg.contains("1e-15"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = MatrixError::empty_input("determinant");
        let msg = err.to_string();
        assert!(msg.contains("determinant = 0x0"));
        assert!(msg.contains("non-empty"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<MatrixError>();
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrixError::not_square((1, 4));
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("NotSquare"));
    }
}
