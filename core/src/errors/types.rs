//! Error type definitions for authentication and token handling.
//!
//! Messages stay generic on purpose: the login path must not reveal whether
//! an email exists, so every credential failure collapses into the same
//! `AuthenticationFailed` variant.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Bad credentials; deliberately does not distinguish unknown email
    /// from wrong password
    #[error("Authorization Failure")]
    AuthenticationFailed,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Authorization token not found")]
    MissingToken,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
