//! Scalar trait for numeric matrix elements.

use super::Complex;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a numeric matrix.
///
/// The rank engine and the structure classifier are generic over this trait;
/// it exposes exactly the operations elimination and classification need:
/// arithmetic, comparison against zero/one, and conversion to integer,
/// floating-point, and complex form. Requiring the bound at compile time
/// replaces run-time narrowing casts.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Scalar;
///
/// assert_eq!(3.7_f64.to_i64(), 3);
/// assert_eq!(i32::from_f64(2.0), 2);
/// assert_eq!(5_u8.to_complex().re, 5.0);
/// ```
pub trait Scalar:
    Copy
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Convert to i64, truncating any fractional part.
    fn to_i64(self) -> i64;

    /// Convert to f64 for generic numeric operations.
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type, truncating for integer types.
    fn from_f64(v: f64) -> Self;

    /// Zero value.
    fn zero() -> Self;

    /// One value.
    fn one() -> Self;

    /// Complex representation with a zero imaginary part.
    fn to_complex(self) -> Complex {
        Complex::new(self.to_f64(), 0.0)
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn one() -> Self {
                    1.0
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar_float!(f32, f64);

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
