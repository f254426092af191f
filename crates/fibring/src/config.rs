//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};
use num_bigint::{BigInt, BigUint};

/// fibring — Fibonacci numbers in any numeric ring.
#[derive(Parser, Debug)]
#[command(name = "fibring", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute (may be negative, any size).
    #[arg(
        short,
        long,
        default_value = "100",
        env = "FIBRING_N",
        allow_negative_numbers = true,
        value_parser = fibring_core::parse_index
    )]
    pub n: BigInt,

    /// Ring holding the intermediate values.
    #[arg(long, value_enum, default_value_t = RingKind::Int)]
    pub ring: RingKind,

    /// Modulus for `--ring mod`.
    #[arg(short, long, env = "FIBRING_MODULUS")]
    pub modulus: Option<BigUint>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (timing and ring details on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Numeric representations selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    /// Exact arbitrary-precision integers.
    Int,
    /// 64-bit unsigned words with wraparound.
    Wrapping,
    /// 64-bit floating point.
    Float,
    /// Integers modulo `--modulus`.
    Mod,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
