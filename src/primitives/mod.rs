//! Core numeric primitives (Vector, Matrix, Complex).
//!
//! These types provide the foundation for the rank engine and the
//! structure classifier in [`crate::linalg`].

mod complex;
mod matrix;
mod scalar;
mod vector;

pub use complex::Complex;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
