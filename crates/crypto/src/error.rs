//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur while verifying a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The token has no `:` separating the signature
    #[error("No signature delimiter found")]
    MalformedToken,

    /// The recomputed signature does not match the one in the token
    #[error("Invalid signature")]
    SignatureMismatch,
}
