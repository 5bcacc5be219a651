//! Authentication error types.

use thiserror::Error;

/// Errors from token handling and password hashing.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to sign a new token.
    #[error("Failed to create token: {0}")]
    TokenCreation(String),

    /// Token failed signature or structural validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token is past its expiry.
    #[error("Token expired")]
    TokenExpired,

    /// Password hashing or verification failed.
    #[error("Password hashing error: {0}")]
    Hashing(String),
}
