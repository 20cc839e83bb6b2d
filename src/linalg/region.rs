//! Region selectors for scoping matrix traversals.

use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Selects which (row, col) positions of a matrix a traversal visits.
///
/// The triangular predicates only need to visit one triangle because the
/// complementary triangle's relationship is implied; scoping the traversal
/// halves the comparison work versus a full scan.
///
/// # Examples
///
/// ```
/// use matriz::linalg::Region;
///
/// assert!(Region::StrictUpper.contains(0, 2));
/// assert!(!Region::StrictUpper.contains(1, 1));
/// assert!(Region::OffDiagonal.contains(2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Every position.
    All,
    /// Positions with row != col.
    OffDiagonal,
    /// Positions strictly above the diagonal (col > row).
    StrictUpper,
    /// Positions on or above the diagonal (col >= row).
    Upper,
    /// Positions strictly below the diagonal (col < row).
    StrictLower,
}

impl Region {
    /// Returns true if (row, col) lies inside this region.
    #[must_use]
    pub fn contains(self, row: usize, col: usize) -> bool {
        match self {
            Region::All => true,
            Region::OffDiagonal => row != col,
            Region::StrictUpper => col > row,
            Region::Upper => col >= row,
            Region::StrictLower => col < row,
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns true if `pred` holds for every entry inside `region`.
    ///
    /// The scan stops at the first counterexample.
    pub fn all_in<F: FnMut(T) -> bool>(&self, region: Region, mut pred: F) -> bool {
        self.all_in_indexed(region, |value, _, _| pred(value))
    }

    /// Returns true if `pred` holds for every (entry, row, col) inside
    /// `region`, stopping at the first counterexample.
    pub fn all_in_indexed<F: FnMut(T, usize, usize) -> bool>(
        &self,
        region: Region,
        mut pred: F,
    ) -> bool {
        for row in 0..self.n_rows() {
            for col in 0..self.n_cols() {
                if region.contains(row, col) && !pred(self.get(row, col), row, col) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod tests;
