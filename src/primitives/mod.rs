//! Core compute primitive: the dense `f64` [`Matrix`].
//!
//! Storage, access and resizing live in `matrix`; element-wise arithmetic
//! and the operator impls in `arithmetic`; transpose, determinant, cofactors
//! and inverse in `linalg`.

mod arithmetic;
mod linalg;
mod matrix;

pub use arithmetic::scale;
pub use matrix::{Matrix, EPS};
