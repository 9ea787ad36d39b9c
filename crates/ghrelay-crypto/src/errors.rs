//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid secret key length.
    #[error("Invalid secret key length")]
    InvalidSecretKeyLength,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = core::result::Result<T, E>;
