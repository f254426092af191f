//! Generic Fast Doubling over an arbitrary [`Ring`].
//!
//! With `(a, b) = (F(k-1), F(k))` the doubling identities
//!
//!   F(2k-1) = F(k)^2 + F(k-1)^2          = b^2 + a^2
//!   F(2k)   = F(k) * (F(k) + 2*F(k-1))   = (a + b)^2 - a^2
//!
//! need only `+`, `-` and `*`, so they hold in every quotient of the integers
//! and the loop never has to divide or multiply by a small constant.
//! The index is walked from MSB to LSB, one squaring triple per bit.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use tracing::trace;

use crate::ring::{Integers, Ring};

/// Pair of consecutive Fibonacci numbers threaded through the doubling loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DoublingState<E> {
    /// F(k-1).
    pub prev: E,
    /// F(k).
    pub curr: E,
}

impl<E: Clone> DoublingState<E> {
    /// State for k = 1: `(F(0), F(1))`.
    pub fn new<R: Ring<Element = E>>(ring: &R) -> Self {
        Self {
            prev: ring.zero(),
            curr: ring.one(),
        }
    }

    /// k -> 2k.
    pub fn double<R: Ring<Element = E>>(&mut self, ring: &R) {
        let s = ring.square(&self.prev);
        let sum = ring.add(&self.prev, &self.curr);
        let prev = ring.add(&ring.square(&self.curr), &s);
        let curr = ring.sub(&ring.square(&sum), &s);
        self.prev = prev;
        self.curr = curr;
    }

    /// k -> k + 1.
    pub fn advance<R: Ring<Element = E>>(&mut self, ring: &R) {
        let sum = ring.add(&self.prev, &self.curr);
        self.prev = std::mem::replace(&mut self.curr, sum);
    }
}

/// Compute F(n) for a non-negative index.
pub fn fibonacci_unsigned<R: Ring>(n: &BigUint, ring: &R) -> R::Element {
    let num_bits = n.bits();
    if num_bits <= 1 {
        return if n.is_zero() { ring.zero() } else { ring.one() };
    }

    // The top bit is already consumed by the initial state.
    let mut state = DoublingState::new(ring);
    for i in (0..num_bits - 1).rev() {
        state.double(ring);
        if n.bit(i) {
            state.advance(ring);
        }
    }

    state.curr
}

/// Compute F(n) in the given ring.
///
/// Negative indices follow `F(-m) = (-1)^(m+1) * F(m)`.
///
/// # Example
/// ```
/// use fibring_core::{fibonacci_in, ModRing};
///
/// let ring = ModRing::new(1_000_000).unwrap();
/// assert_eq!(fibonacci_in(100, &ring), 915_075);
/// ```
pub fn fibonacci_in<R: Ring>(n: impl Into<BigInt>, ring: &R) -> R::Element {
    let n = n.into();
    let negative = n.sign() == Sign::Minus;
    let magnitude = n.magnitude();
    trace!(bits = magnitude.bits(), negative, "fast doubling");

    let value = fibonacci_unsigned(magnitude, ring);
    if negative && !magnitude.bit(0) {
        ring.neg(&value)
    } else {
        value
    }
}

/// Compute F(n) over the integers.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
///
/// assert_eq!(fibring_core::fibonacci(10), BigInt::from(55));
/// assert_eq!(fibring_core::fibonacci(-10), BigInt::from(-55));
/// ```
#[must_use]
pub fn fibonacci(n: impl Into<BigInt>) -> BigInt {
    fibonacci_in(n, &Integers::new())
}
