#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use fibring_core::{fibonacci, fibonacci_in, ModRing};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    // First 8 bytes are the modulus, the rest a signed index capped at 2^16
    // magnitude so the unbounded result stays cheap.
    let modulus = u64::from_le_bytes(data[..8].try_into().unwrap()).max(1);
    let sign = if data[8] & 1 == 1 { Sign::Minus } else { Sign::Plus };
    let magnitude = u16::from_le_bytes([data[9], data.get(10).copied().unwrap_or(0)]);
    let n = BigInt::from_biguint(sign, magnitude.into());

    let ring = ModRing::new(modulus).unwrap();
    let residue = fibonacci_in(n.clone(), &ring);
    assert_eq!(residue, ring.reduce(&fibonacci(n.clone())), "F({n}) mod {modulus}");
});
