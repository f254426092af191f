//! The ring capability contract consumed by the doubling engine.
//!
//! A [`Ring`] is a factory object: it builds the additive and multiplicative
//! identities and combines elements with `+`, `-` and `*`. Nothing else about
//! the element representation is visible to the engine, so the same code runs
//! over machine integers, big integers, floats or residues mod m.

use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Numeric ring used for the intermediate values of a Fibonacci computation.
pub trait Ring {
    /// Value type living in this ring.
    type Element: Clone;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `a - b`.
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `a * b`.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Additive inverse, `0 - a` unless the ring has something cheaper.
    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.sub(&self.zero(), a)
    }

    /// `a * a`.
    fn square(&self, a: &Self::Element) -> Self::Element {
        self.mul(a, a)
    }
}

impl<R: Ring + ?Sized> Ring for &R {
    type Element = R::Element;

    fn zero(&self) -> Self::Element {
        (**self).zero()
    }

    fn one(&self) -> Self::Element {
        (**self).one()
    }

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (**self).add(a, b)
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (**self).sub(a, b)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (**self).mul(a, b)
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        (**self).neg(a)
    }

    fn square(&self, a: &Self::Element) -> Self::Element {
        (**self).square(a)
    }
}

/// Ring over a type that already knows its own arithmetic.
///
/// Any `T` with `num-traits` identities and by-reference `+ - *` qualifies:
/// `BigInt`, `i64`, `Wrapping<u64>`, `f64`, ... Overflow, wraparound and
/// rounding are whatever `T` does.
///
/// Unsigned types cannot negate, so negative indices of even magnitude
/// underflow on them.
///
/// # Example
/// ```
/// use std::num::Wrapping;
/// use fibring_core::{fibonacci_in, Native};
///
/// let ring = Native::<Wrapping<u64>>::new();
/// assert_eq!(fibonacci_in(93, &ring), Wrapping(12_200_160_415_121_876_738));
/// ```
pub struct Native<T = BigInt> {
    _marker: PhantomData<fn() -> T>,
}

/// The ordinary integers, used when no ring is specified.
pub type Integers = Native<BigInt>;

impl<T> Native<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Native<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Native<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Native<T> {}

impl<T> std::fmt::Debug for Native<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Native<{}>", std::any::type_name::<T>())
    }
}

impl<T> Ring for Native<T>
where
    T: Clone + Zero + One,
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    type Element = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn add(&self, a: &T, b: &T) -> T {
        a + b
    }

    fn sub(&self, a: &T, b: &T) -> T {
        a - b
    }

    fn mul(&self, a: &T, b: &T) -> T {
        a * b
    }
}
