//! Profile route handlers
//!
//! - GET /owner/{email}
//! - GET /profile/{email}
//! - GET /getprofileinfo/{id}
//! - PUT /updateprofile/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hh_core::errors::{AuthError, DomainError};
use hh_core::repositories::{BookingRepository, HouseRepository, UserRepository};

use crate::app::AppState;
use crate::dto::user::{OwnerCheckResponse, ProfileUpdateRequest};
use crate::dto::validate_dto;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /owner/{email}
///
/// Role probe: `{"owner": true}` only for a known owner account, `false` for
/// tenants and unknown emails alike.
pub async fn owner_check<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let owner = state.auth_service.is_owner(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OwnerCheckResponse { owner }))
}

/// Handler for GET /profile/{email}
pub async fn profile_by_email<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let user = state
        .auth_service
        .profile_by_email(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Handler for GET /getprofileinfo/{id}
pub async fn profile_by_id<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let user = state.auth_service.profile_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Handler for PUT /updateprofile/{id}
///
/// Partial update over the whitelisted field set. Only the account itself may
/// update its profile.
pub async fn update_profile<U, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
    request: web::Json<ProfileUpdateRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let id = path.into_inner();
    if auth.user_id != id {
        return Err(ApiError(DomainError::Auth(AuthError::InsufficientPermissions)));
    }

    validate_dto(&request.0)?;

    let user = state
        .auth_service
        .update_profile(id, request.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}
