//! Matriz: a dense real-valued matrix value type in pure Rust.
//!
//! [`Matrix`] owns a contiguous row-major `Vec<f64>` and behaves like a
//! built-in numeric value: `Clone` deep-copies, `==` compares within
//! [`EPS`], and `+`, `-`, `*` work between matrices and with `f64` scalars.
//! Determinant, cofactor matrix and inverse use cofactor (Laplace)
//! expansion and target small matrices.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(3, 3, vec![
//!     2.0, 5.0, 7.0,
//!     6.0, 3.0, 4.0,
//!     5.0, -2.0, -3.0,
//! ]).expect("3*3=9 elements");
//!
//! assert_eq!(a.determinant(), Ok(-1.0));
//!
//! let inv = a.inverse_matrix().expect("determinant is non-zero");
//! assert_eq!(&a * &inv, Matrix::identity(3).expect("n > 0"));
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with a [`MatrixError`]. The
//! symbolic operators (`+`, `-`, `*`, indexing) panic with the same error
//! message instead, so prefer the named methods when shapes come from input.
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type and its operations
//! - [`error`]: [`MatrixError`] and the [`Result`] alias

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrixError, Result};
pub use primitives::{scale, Matrix, EPS};
