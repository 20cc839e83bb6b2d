//! Elimination-based rank and algebraic structure classification.
//!
//! This module extends [`crate::primitives::Matrix`] with:
//!
//! - [`Region`]: a selector scoping a traversal to a triangular or diagonal
//!   portion of the matrix
//! - a rank computation via fraction-free Gaussian elimination with row
//!   pivoting (`Matrix::rank`)
//! - the structure classifier (`is_diagonal`, `is_symmetric`,
//!   `is_hermitian`, `is_permutation`, ...)
//! - [`MatrixOps`]: the arithmetic/decomposition obligations a concrete
//!   numeric matrix type must satisfy, with [`LupDecomposition`] as the
//!   decomposition value type

mod ops;
mod rank;
mod region;
mod structure;

pub use ops::{LupDecomposition, MatrixOps};
pub use region::Region;
