//! Matriz: generic numeric matrix primitives in pure Rust.
//!
//! Matriz provides a rectangular `Matrix<T>` over any numeric scalar type,
//! together with an elimination-based rank computation and a family of
//! algebraic structure predicates (diagonal, triangular, symmetric,
//! Hermitian, normal, orthogonal, unitary, permutation, ...).
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_vec(2, 2, vec![
//!     1.0, 2.0,
//!     2.0, 4.0,
//! ]).unwrap();
//!
//! // Rank-deficient: the second row is twice the first.
//! assert_eq!(m.rank(), 1);
//! assert_eq!(m.is_symmetric(), Ok(true));
//!
//! let id = Matrix::<f64>::identity(3);
//! assert_eq!(id.rank(), 3);
//! assert_eq!(id.is_diagonal(), Ok(true));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core `Vector`, `Matrix`, `Complex` types and the
//!   [`primitives::Scalar`] element trait
//! - [`linalg`]: Rank engine, structure classifier, region-scoped traversal,
//!   and the arithmetic/decomposition contract for concrete matrix types
//! - [`error`]: Error types and the crate `Result` alias

pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;
