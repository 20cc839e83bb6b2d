//! Rank computation via fraction-free Gaussian elimination.

use crate::primitives::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Computes the rank of the matrix.
    ///
    /// Performs forward elimination with partial row pivoting over a private
    /// working copy; the matrix itself is never mutated. The elimination is
    /// fraction-free (Bareiss): each update divides by the previous pivot,
    /// which keeps intermediate values exact for integer inputs at the cost
    /// of growing magnitude. Rectangular matrices are valid input; the
    /// result is the number of pivot columns found.
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(m.rank(), 1);
    /// ```
    #[must_use]
    pub fn rank(&self) -> usize {
        if self.n_rows() == 0 || self.n_cols() == 0 {
            return 0;
        }
        let mut a = self.to_nested();
        let last_col = self.n_cols() - 1;
        let last_row = self.n_rows() - 1;
        let mut pivot_row = 0;
        let mut prev_pivot = 1_i64;
        for k in 0..=last_col {
            // TODO: the pivot test truncates the candidate to an integer, so
            // fractional entries in (-1, 1) never qualify as pivots; revisit
            // together with a tolerance-based comparison.
            let switch_row = (pivot_row..=last_row).find(|&r| a[r][k].to_i64() != 0);
            if let Some(switch_row) = switch_row {
                if switch_row != pivot_row {
                    a.swap(pivot_row, switch_row);
                }
                let pivot = a[pivot_row][k];
                for i in (pivot_row + 1)..=last_row {
                    for j in (k + 1)..=last_col {
                        let updated = pivot.to_f64() * a[i][j].to_f64()
                            - a[i][k].to_f64() * a[pivot_row][j].to_f64();
                        a[i][j] = T::from_f64(updated / prev_pivot as f64);
                    }
                }
                pivot_row += 1;
                prev_pivot = pivot.to_i64();
            }
        }
        pivot_row
    }
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
