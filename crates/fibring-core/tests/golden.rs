//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks the integer,
//! wrapping and residue rings against the recorded values.

use std::num::Wrapping;

use num_bigint::{BigInt, BigUint};
use serde::Deserialize;

use fibring_core::{fibonacci, fibonacci_in, parse_index, BigModRing, ModRing, Native};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
    residues: Vec<ResidueEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: i64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

/// Indices and moduli are strings: they do not fit JSON numbers.
#[derive(Deserialize)]
struct ResidueEntry {
    n: String,
    modulus: String,
    residue: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn parse_biguint(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("golden modulus")
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_integers() {
    let data = load_golden_data();
    for entry in &data.values {
        if let Some(expected) = &entry.fib {
            assert_eq!(
                fibonacci(entry.n).to_string(),
                *expected,
                "Integers mismatch at n={}",
                entry.n,
            );
        }
    }
}

#[test]
fn golden_exact_wrapping_u64() {
    let ring = Native::<Wrapping<u64>>::new();
    let word = BigInt::from(u64::MAX) + 1;
    let data = load_golden_data();
    for entry in &data.values {
        let Some(expected) = &entry.fib else {
            continue;
        };
        let expected: BigInt = expected.parse().expect("golden value");
        let reduced = ((expected % &word) + &word) % &word;
        let got = fibonacci_in(entry.n, &ring);
        assert_eq!(
            BigInt::from(got.0),
            reduced,
            "Wrapping<u64> mismatch at n={}",
            entry.n,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: prefix & digit count
// ---------------------------------------------------------------------------

#[test]
fn golden_prefix_and_digits() {
    let data = load_golden_data();
    for entry in &data.values {
        // n=100000 is covered by the ignored test below
        if entry.n > 10_000 {
            continue;
        }
        let s = fibonacci(entry.n).to_string();

        if let Some(prefix) = &entry.fib_prefix {
            assert!(
                s.starts_with(prefix.as_str()),
                "prefix mismatch at n={}: expected starts_with '{}', got '{}'",
                entry.n,
                prefix,
                &s[..prefix.len().min(s.len())],
            );
        }

        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(
                s.len(),
                expected_digits,
                "digit count mismatch at n={}",
                entry.n,
            );
        }
    }
}

#[test]
#[ignore]
fn golden_large_n_100000() {
    let data = load_golden_data();
    for entry in data.values.iter().filter(|e| e.n == 100_000) {
        let s = fibonacci(entry.n).to_string();
        if let Some(prefix) = &entry.fib_prefix {
            assert!(s.starts_with(prefix.as_str()), "prefix mismatch for n=100000");
        }
        if let Some(expected_digits) = entry.fib_digits {
            assert_eq!(s.len(), expected_digits, "digit count mismatch for n=100000");
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: residues
// ---------------------------------------------------------------------------

#[test]
fn golden_residues() {
    let data = load_golden_data();
    for entry in &data.residues {
        let n = parse_index(&entry.n).expect("golden index");
        let modulus = parse_biguint(&entry.modulus);
        let expected = parse_biguint(&entry.residue);

        let big = BigModRing::new(modulus.clone()).unwrap();
        assert_eq!(
            fibonacci_in(n.clone(), &big),
            expected,
            "BigModRing mismatch at n={} mod {}",
            entry.n,
            entry.modulus,
        );

        let small = ModRing::new(u64::try_from(&modulus).expect("modulus fits u64")).unwrap();
        assert_eq!(
            BigUint::from(fibonacci_in(n, &small)),
            expected,
            "ModRing mismatch at n={} mod {}",
            entry.n,
            entry.modulus,
        );
    }
}
