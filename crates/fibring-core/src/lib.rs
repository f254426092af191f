//! # fibring-core
//!
//! Fast Doubling Fibonacci, generic over the numeric ring that holds the
//! intermediate values: big integers, wrapping machine words, floats or
//! residues mod m all run through the same O(log n) loop.

pub mod error;
pub mod fastdoubling;
pub mod modular;
pub mod ring;

#[cfg(feature = "gmp")]
pub mod gmp;

// Re-exports
pub use error::{parse_index, RingError};
pub use fastdoubling::{fibonacci, fibonacci_in};
pub use modular::{BigModRing, ModRing};
pub use ring::{Integers, Native, Ring};

#[cfg(feature = "gmp")]
pub use gmp::{GmpFloats, GmpIntegers};
