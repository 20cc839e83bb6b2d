//! Complex number type for the structure classifier.
//!
//! The Hermitian, normal, orthogonal, and unitary predicates lift matrix
//! entries into complex form before comparing. Only the operations those
//! predicates consume are implemented: construction, conjugation, equality
//! against [`Complex::ZERO`]/[`Complex::ONE`], addition, subtraction,
//! multiplication, and negation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A complex number with f64 real and imaginary parts.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Complex;
///
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.conj(), Complex::new(3.0, -4.0));
/// assert_eq!(z * Complex::ONE, z);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Zero complex number.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit).
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Creates a new complex number.
    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex conjugate: conj(a + bi) = a - bi.
    #[inline]
    #[must_use]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
