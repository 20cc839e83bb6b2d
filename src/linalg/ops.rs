//! Arithmetic and decomposition obligations for concrete numeric matrices.
//!
//! [`MatrixOps`] declares the operations a concrete matrix implementation
//! must supply; the algorithms themselves live with the implementor, not in
//! this crate. The singularity predicates are provided here because their
//! only dependency is the black-box determinant.

use crate::error::Result;
use crate::primitives::{Matrix, Scalar};
use serde::{Deserialize, Serialize};

/// An LU decomposition with row pivoting.
///
/// Data carrier only; producing one is an obligation of [`MatrixOps::lup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LupDecomposition<T> {
    /// Unit lower-triangular factor.
    pub lower: Matrix<T>,
    /// Upper-triangular factor.
    pub upper: Matrix<T>,
    /// Row permutation applied to the input.
    pub permutation: Matrix<T>,
    /// Number of row swaps the pivoting performed.
    pub swaps: usize,
}

/// Operations any concrete numeric matrix type must satisfy.
///
/// Element-wise arithmetic, matrix products, and the determinant family are
/// declared as required methods with no bodies here. `is_singular` and
/// `is_regular` are provided on top of the black-box `determinant`.
pub trait MatrixOps<T: Scalar>: Sized {
    /// Element-wise addition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn add(&self, other: &Self) -> Result<Self>;

    /// Element-wise subtraction.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn sub(&self, other: &Self) -> Result<Self>;

    /// Element-wise multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn mul(&self, other: &Self) -> Result<Self>;

    /// Element-wise division.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn div(&self, other: &Self) -> Result<Self>;

    /// Element-wise remainder.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn rem(&self, other: &Self) -> Result<Self>;

    /// Element-wise exponentiation.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn pow(&self, other: &Self) -> Result<Self>;

    /// In-place element-wise addition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn add_assign(&mut self, other: &Self) -> Result<()>;

    /// In-place element-wise subtraction.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn sub_assign(&mut self, other: &Self) -> Result<()>;

    /// In-place element-wise multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn mul_assign(&mut self, other: &Self) -> Result<()>;

    /// In-place element-wise division.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn div_assign(&mut self, other: &Self) -> Result<()>;

    /// In-place element-wise remainder.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn rem_assign(&mut self, other: &Self) -> Result<()>;

    /// In-place element-wise exponentiation.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    fn pow_assign(&mut self, other: &Self) -> Result<()>;

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes are incompatible.
    fn dot(&self, other: &Self) -> Result<Self>;

    /// Cross product.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes are incompatible.
    fn cross(&self, other: &Self) -> Result<Self>;

    /// Matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if inner dimensions differ.
    fn matmul(&self, other: &Self) -> Result<Self>;

    /// Matrix division (multiplication by the inverse).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes are incompatible.
    fn matdiv(&self, other: &Self) -> Result<Self>;

    /// Sum of the diagonal entries.
    fn trace(&self) -> T;

    /// Matrix inverse.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    fn inverse(&self) -> Result<Self>;

    /// Determinant.
    fn determinant(&self) -> f64;

    /// Signed cofactor at (row, col).
    fn cofactor(&self, row: usize, col: usize) -> T;

    /// The matrix with `row` and `col` removed.
    fn first_minor(&self, row: usize, col: usize) -> Self;

    /// Adjugate (transpose of the cofactor matrix).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    fn adjugate(&self) -> Result<Self>;

    /// Laplace expansion of the determinant along `row` or `col`.
    fn laplace_expansion(&self, row: Option<usize>, col: Option<usize>) -> T;

    /// LU decomposition with row pivoting.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    fn lup(&self) -> Result<LupDecomposition<T>>;

    /// Returns true if the determinant is zero.
    fn is_singular(&self) -> bool {
        self.determinant() == 0.0
    }

    /// Returns true if the matrix is invertible.
    fn is_regular(&self) -> bool {
        !self.is_singular()
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
