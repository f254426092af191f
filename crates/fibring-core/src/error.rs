//! Errors raised while building rings or reading indices.

use std::str::FromStr;

use num_bigint::BigInt;

/// Error type for ring construction and index parsing.
///
/// The doubling loop itself cannot fail; these only arise at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// Z/0Z is not a usable ring.
    #[error("modulus cannot be zero")]
    ZeroModulus,

    /// Index text was not a signed decimal integer.
    #[error("invalid index: {0:?}")]
    InvalidIndex(String),
}

/// Parse a signed decimal Fibonacci index of any magnitude.
///
/// Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// let n = fibring_core::parse_index(" -1000 ").unwrap();
/// assert_eq!(n, num_bigint::BigInt::from(-1000));
/// ```
pub fn parse_index(s: &str) -> Result<BigInt, RingError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(RingError::InvalidIndex(s.to_owned()));
    }
    BigInt::from_str(trimmed).map_err(|_| RingError::InvalidIndex(s.to_owned()))
}
