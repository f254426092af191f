//! Residue rings Z/mZ.
//!
//! Every operation returns the canonical residue in `[0, m)`, so the doubling
//! loop never sees values wider than the modulus and F(n) mod m costs
//! O(log n) word operations regardless of how large F(n) is.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::RingError;
use crate::ring::Ring;

/// Z/mZ for a modulus that fits in a `u64`.
///
/// # Example
/// ```
/// use fibring_core::{fibonacci_in, ModRing};
///
/// let ring = ModRing::new(998_244_353).unwrap();
/// let n: i128 = 79_496_847_203_390_844_133_441_536;
/// assert_eq!(fibonacci_in(n, &ring), 357_977_786);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModRing {
    modulus: u64,
}

impl ModRing {
    pub fn new(modulus: u64) -> Result<Self, RingError> {
        if modulus == 0 {
            return Err(RingError::ZeroModulus);
        }
        Ok(Self { modulus })
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Canonical residue of an arbitrary signed integer.
    #[must_use]
    pub fn reduce(&self, value: &BigInt) -> u64 {
        let m = BigInt::from(self.modulus);
        let r = value.mod_floor(&m);
        // r < m <= u64::MAX
        r.magnitude().iter_u64_digits().next().unwrap_or(0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(&self, wide: u128) -> u64 {
        (wide % u128::from(self.modulus)) as u64
    }
}

impl Ring for ModRing {
    type Element = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1 % self.modulus
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        self.narrow(u128::from(*a) + u128::from(*b))
    }

    fn sub(&self, a: &u64, b: &u64) -> u64 {
        let m = u128::from(self.modulus);
        self.narrow(u128::from(*a) + m - u128::from(*b) % m)
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        self.narrow(u128::from(*a) * u128::from(*b))
    }
}

/// Z/mZ for a modulus of any size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigModRing {
    modulus: BigUint,
}

impl BigModRing {
    pub fn new(modulus: BigUint) -> Result<Self, RingError> {
        if modulus.is_zero() {
            return Err(RingError::ZeroModulus);
        }
        Ok(Self { modulus })
    }

    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Canonical residue of an arbitrary signed integer.
    #[must_use]
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        let m = BigInt::from(self.modulus.clone());
        value.mod_floor(&m).magnitude().clone()
    }
}

impl Ring for BigModRing {
    type Element = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one() % &self.modulus
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.modulus;
        if *a >= b {
            (a - b) % &self.modulus
        } else {
            (&self.modulus - b + a) % &self.modulus
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }
}
