//! Matrix type for dense 2D `f64` data.

use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Absolute tolerance used by equality and singularity checks.
pub const EPS: f64 = 1e-6;

/// A dense matrix of `f64` values (row-major storage).
///
/// A matrix is either `0x0` with no storage (the [`Default`] state, also
/// left behind by [`Matrix::take`]) or has at least one row and one column.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let mut m = Matrix::new(2, 3).expect("dimensions are positive");
/// m[(1, 2)] = 6.0;
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[1][2], 6.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; shape is re-checked before it becomes a `Matrix`.
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        if raw.rows == 0 && raw.cols == 0 && raw.data.is_empty() {
            return Ok(Self::empty());
        }
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Creates the `0x0` matrix. Does not allocate.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or
    /// `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or the element
    /// count overflows, or `DimensionMismatch` if data length doesn't match
    /// rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{len} elements ({rows}x{cols})"),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Moves the contents out, leaving `self` as the `0x0` matrix.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when rows == cols (including `0x0`).
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for the `0x0` matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if indices are out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns a row as a slice.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `row_idx >= rows`.
    pub fn row(&self, row_idx: usize) -> Result<&[f64]> {
        if row_idx >= self.rows {
            return Err(MatrixError::out_of_range(row_idx, 0, self.shape()));
        }
        let start = row_idx * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Iterates over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// Returns the underlying data as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Changes the row count, keeping the overlapping rows and zero-filling
    /// new ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `new_rows` is zero, if the new element
    /// count overflows, or if the matrix is `0x0` (a row count alone cannot
    /// give it a positive column count).
    pub fn set_rows(&mut self, new_rows: usize) -> Result<()> {
        let len = checked_len(new_rows, self.cols)?;
        log::debug!("resizing rows {} -> {new_rows} (cols={})", self.rows, self.cols);
        // Row-major: whole rows are appended or dropped at the tail.
        self.data.resize(len, 0.0);
        self.rows = new_rows;
        Ok(())
    }

    /// Changes the column count, keeping the overlapping columns and
    /// zero-filling new ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `new_cols` is zero, if the new element
    /// count overflows, or if the matrix is `0x0`.
    pub fn set_cols(&mut self, new_cols: usize) -> Result<()> {
        let len = checked_len(self.rows, new_cols)?;
        log::debug!("resizing cols {} -> {new_cols} (rows={})", self.cols, self.rows);
        let keep = self.cols.min(new_cols);
        let mut data = vec![0.0; len];
        for (dst, src) in data
            .chunks_exact_mut(new_cols)
            .zip(self.data.chunks_exact(self.cols))
        {
            dst[..keep].copy_from_slice(&src[..keep]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }

    /// Tolerance-based equality: same shape and every element pair within
    /// [`EPS`].
    #[must_use]
    pub fn eq_matrix(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= EPS)
    }

    fn row_mut(&mut self, row_idx: usize) -> Result<&mut [f64]> {
        if row_idx >= self.rows {
            return Err(MatrixError::out_of_range(row_idx, 0, self.shape()));
        }
        let start = row_idx * self.cols;
        Ok(&mut self.data[start..start + self.cols])
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_range(row, col, self.shape()));
        }
        Ok(row * self.cols + col)
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Unchecked element read for the algorithms in this module tree.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }
}

fn check_dimension(param: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MatrixError::invalid_dimension(param, value));
    }
    Ok(())
}

/// Element count for a `rows x cols` buffer; both dimensions must be positive.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    check_dimension("rows", rows)?;
    check_dimension("cols", cols)?;
    rows.checked_mul(cols)
        .ok_or_else(|| MatrixError::InvalidArgument {
            param: "rows * cols".to_string(),
            value: format!("{rows} * {cols}"),
            constraint: format!("<= {}", usize::MAX),
        })
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

/// Row access: `m[row][col]`.
///
/// # Panics
///
/// Panics if `row` is out of bounds; the column is checked by slice indexing.
impl Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, row: usize) -> &[f64] {
        match self.row(row) {
            Ok(slice) => slice,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut [f64] {
        match self.row_mut(row) {
            Ok(slice) => slice,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element access: `m[(row, col)]`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.get_mut(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
