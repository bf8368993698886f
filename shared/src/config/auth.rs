//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Bearer tokens expire one hour after issuance.
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            token_expiry: TOKEN_EXPIRY_SECONDS,
            issuer: String::from("house-hunter"),
        }
    }
}

impl AuthConfig {
    /// Create a new auth configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("ACCESS_TOKEN_SECRET")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or_else(|_| "change-me-in-production".to_string());
        let token_expiry = std::env::var("TOKEN_EXPIRY_SECONDS")
            .unwrap_or_else(|_| TOKEN_EXPIRY_SECONDS.to_string())
            .parse()
            .unwrap_or(TOKEN_EXPIRY_SECONDS);

        Self {
            secret,
            token_expiry,
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}
