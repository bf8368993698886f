//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use hh_core::domain::entities::user::UserRole;
use hh_core::services::auth::SignupData;

/// Request body for POST /signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 255, message = "must not be empty"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,

    /// "tenant" or "owner"
    pub role: UserRole,
}

impl From<SignupRequest> for SignupData {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            role: request.role,
        }
    }
}

/// Request body for POST /login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Response body for POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
