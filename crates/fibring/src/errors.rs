//! Error handling and exit codes.

use fibring_core::RingError;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

/// Errors detected while turning the configuration into a computation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `--ring mod` without `--modulus`.
    #[error("--ring mod requires --modulus")]
    MissingModulus,

    /// The requested ring could not be built.
    #[error(transparent)]
    Ring(#[from] RingError),
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::MissingModulus | AppError::Ring(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
