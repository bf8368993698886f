//! Token service: signs and verifies the opaque bearer credential.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use hh_shared::config::AuthConfig;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Service for JWT token management.
///
/// Tokens are HS256-signed and expire one hour after issuance (configurable).
/// Verification rejects expired, tampered, and foreign-issuer tokens, each
/// mapped to a distinct [`TokenError`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl TokenService {
    /// Create a new token service from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiry_seconds: config.token_expiry,
        }
    }

    /// Issue a signed bearer token bound to the given user
    pub fn generate(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(user, self.expiry_seconds);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verify a bearer token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            let token_error = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) => {
                    TokenError::InvalidTokenFormat
                }
                _ => TokenError::InvalidClaims,
            };
            DomainError::Token(token_error)
        })?;

        Ok(data.claims)
    }
}
