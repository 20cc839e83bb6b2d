//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::linalg::{LupDecomposition, MatrixOps, Region};
pub use crate::primitives::{Complex, Matrix, Scalar, Vector};
