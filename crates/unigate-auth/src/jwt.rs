//! Session token encoding and validation.
//!
//! Tokens are HS256 JWTs signed with the service's session secret.

use crate::claims::SessionClaims;
use crate::error::AuthError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// Sign session claims into a compact JWT.
///
/// # Errors
///
/// Returns `AuthError::TokenCreation` if serialization or signing fails.
pub fn encode_token(claims: &SessionClaims, secret: &[u8]) -> Result<String, AuthError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Decode and validate a session token.
///
/// Validates the signature and expiry.
///
/// # Errors
///
/// Returns `AuthError::TokenExpired` for expired tokens and
/// `AuthError::InvalidToken` for any other validation failure.
pub fn decode_token(token: &str, secret: &[u8]) -> Result<SessionClaims, AuthError> {
    let validation = Validation::default();
    decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(map_jwt_error)
}

/// Map jsonwebtoken errors to `AuthError`.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(err.to_string()),
    }
}
