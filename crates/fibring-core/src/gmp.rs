//! GMP-backed rings using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled.

use rug::{Float, Integer};

use crate::ring::Ring;

/// The integers, with GMP doing the limb arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmpIntegers;

impl Ring for GmpIntegers {
    type Element = Integer;

    fn zero(&self) -> Integer {
        Integer::new()
    }

    fn one(&self) -> Integer {
        Integer::from(1)
    }

    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a + b)
    }

    fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a - b)
    }

    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        Integer::from(a * b)
    }

    fn neg(&self, a: &Integer) -> Integer {
        Integer::from(-a)
    }

    fn square(&self, a: &Integer) -> Integer {
        Integer::from(a.square_ref())
    }
}

/// Binary floating point with a caller-chosen mantissa width.
///
/// Results are exact as long as every intermediate fits in `precision` bits.
/// The widest intermediate is about F(n+1), so `0.7 * n + 64` bits suffice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GmpFloats {
    precision: u32,
}

impl GmpFloats {
    /// Precision in bits, clamped to MPFR's supported range.
    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.clamp(rug::float::prec_min(), rug::float::prec_max()),
        }
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Ring for GmpFloats {
    type Element = Float;

    fn zero(&self) -> Float {
        Float::new(self.precision)
    }

    fn one(&self) -> Float {
        Float::with_val(self.precision, 1)
    }

    fn add(&self, a: &Float, b: &Float) -> Float {
        Float::with_val(self.precision, a + b)
    }

    fn sub(&self, a: &Float, b: &Float) -> Float {
        Float::with_val(self.precision, a - b)
    }

    fn mul(&self, a: &Float, b: &Float) -> Float {
        Float::with_val(self.precision, a * b)
    }

    fn neg(&self, a: &Float) -> Float {
        Float::with_val(self.precision, -a)
    }

    fn square(&self, a: &Float) -> Float {
        Float::with_val(self.precision, a.square_ref())
    }
}
