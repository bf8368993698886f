//! Profile DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use hh_core::domain::entities::user::ProfilePatch;

/// Request body for PUT /updateprofile/{id}.
///
/// All fields are optional; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 255, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,

    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,
}

impl From<ProfileUpdateRequest> for ProfilePatch {
    fn from(request: ProfileUpdateRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            address: request.address,
            phone: request.phone,
            photo: request.photo,
            gender: request.gender,
        }
    }
}

/// Response body for GET /owner/{email}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerCheckResponse {
    pub owner: bool,
}
