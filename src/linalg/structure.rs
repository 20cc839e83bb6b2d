//! Structure classifier: algebraic property predicates.
//!
//! Each predicate is pure and reads the matrix through a region-scoped,
//! early-exit traversal. Predicates that only make sense for square
//! matrices return `Result<bool>` and fail with
//! [`MatrizError::DimensionMismatch`] before any traversal; the rest return
//! `bool` directly.

use super::Region;
use crate::error::{MatrizError, Result};
use crate::primitives::{Complex, Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrizError::DimensionMismatch {
                expected: "square matrix".to_string(),
                actual: format!("{}x{}", self.n_rows(), self.n_cols()),
            })
        }
    }

    /// Returns true if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.all_in(Region::All, |x| x == T::zero())
    }

    /// Returns true if every off-diagonal entry is zero.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_diagonal(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.all_in(Region::OffDiagonal, |x| x == T::zero()))
    }

    /// Returns true if every entry strictly above the diagonal is zero.
    #[must_use]
    pub fn is_lower_triangular(&self) -> bool {
        self.all_in(Region::StrictUpper, |x| x == T::zero())
    }

    /// Returns true if every entry strictly below the diagonal is zero.
    #[must_use]
    pub fn is_upper_triangular(&self) -> bool {
        self.all_in(Region::StrictLower, |x| x == T::zero())
    }

    /// Returns true if the matrix equals its transpose.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_symmetric(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.all_in_indexed(Region::StrictUpper, |value, row, col| {
            value == self.get(col, row)
        }))
    }

    /// Returns true if the matrix equals the negation of its transpose,
    /// compared in complex form.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_anti_symmetric(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.all_in_indexed(Region::Upper, |value, row, col| {
            value.to_complex() == -self.get(col, row).to_complex()
        }))
    }

    /// Returns true if every entry on or above the diagonal is real-valued
    /// in complex representation (equal to its own conjugate).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_hermitian(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.all_in(Region::Upper, |value| {
            let z = value.to_complex();
            z == z.conj()
        }))
    }

    /// Returns true if the matrix is a permutation matrix: exactly one entry
    /// equal to one per row, all other entries zero, and no column receiving
    /// more than one such entry.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_permutation(&self) -> Result<bool> {
        self.require_square()?;
        let n = self.n_rows();
        let mut col_used = vec![false; n];
        for row in 0..n {
            let mut found = false;
            for col in 0..n {
                let entry = self.get(row, col);
                if entry == T::one() {
                    if found || col_used[col] {
                        return Ok(false);
                    }
                    col_used[col] = true;
                    found = true;
                } else if entry != T::zero() {
                    return Ok(false);
                }
            }
            if !found {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if the matrix commutes with its conjugate transpose:
    /// for all (i, j), Σ_k row_i[k]·conj(row_j[k]) − conj(row_k[i])·row_k[j]
    /// is the complex zero.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_normal(&self) -> Result<bool> {
        self.require_square()?;
        let n = self.n_rows();
        for i in 0..n {
            for j in 0..n {
                let mut sum = Complex::ZERO;
                for k in 0..n {
                    sum = sum
                        + self.get(i, k).to_complex() * self.get(j, k).to_complex().conj()
                        - self.get(k, i).to_complex().conj() * self.get(k, j).to_complex();
                }
                if sum != Complex::ZERO {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Orthogonality test over the row inner products.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_orthogonal(&self) -> Result<bool> {
        self.require_square()?;
        let n = self.n_rows();
        for i in 0..n {
            for j in 0..n {
                let mut sum = Complex::ZERO;
                for k in 0..n {
                    sum = sum + self.get(i, k).to_complex() * self.get(k, j).to_complex();
                }
                // TODO: this comparison is inverted relative to the textbook
                // definition (it should reject when the product entry does
                // NOT match the Kronecker delta); fix together with callers
                // and with is_unitary below.
                let delta = if i == j { Complex::ONE } else { Complex::ZERO };
                if sum == delta {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Unitarity test; identical to [`Matrix::is_orthogonal`] except the row
    /// entries are conjugated inside the sum.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix is not square.
    pub fn is_unitary(&self) -> Result<bool> {
        self.require_square()?;
        let n = self.n_rows();
        for i in 0..n {
            for j in 0..n {
                let mut sum = Complex::ZERO;
                for k in 0..n {
                    sum = sum + self.get(i, k).to_complex().conj() * self.get(k, j).to_complex();
                }
                // Same inverted polarity as is_orthogonal.
                let delta = if i == j { Complex::ONE } else { Complex::ZERO };
                if sum == delta {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_structure_contract.rs"]
mod tests_structure_contract;
