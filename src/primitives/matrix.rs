//! Matrix type for 2D numeric data.

use super::{Scalar, Vector};
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A rectangular matrix of numeric values (row-major storage).
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix by evaluating a generator at every (row, col) index.
    ///
    /// This is the canonical constructor; the vector-based shapes
    /// ([`Matrix::from_row_vector`], [`Matrix::from_rows`]) adapt onto it.
    #[must_use]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut init: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(init(r, c));
            }
        }
        Self { data, rows, cols }
    }

    /// Creates a 1×n row matrix from a vector.
    #[must_use]
    pub fn from_row_vector(vector: &Vector<T>) -> Self {
        Self::from_fn(1, vector.len(), |_, c| vector[c])
    }

    /// Creates a matrix whose rows are the given vectors.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the rows differ in length.
    pub fn from_rows(rows: &[Vector<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vector::len);
        for row in rows {
            if row.len() != cols {
                return Err(MatrizError::DimensionMismatch {
                    expected: format!("rows of length {cols}"),
                    actual: format!("row of length {}", row.len()),
                });
            }
        }
        Ok(Self::from_fn(rows.len(), cols, |r, c| rows[r][c]))
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols.max(1)).map(<[T]>::to_vec).collect()
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
