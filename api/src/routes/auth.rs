//! Account and session route handlers
//!
//! - POST /signup
//! - POST /login
//! - GET /currentuser

use actix_web::{web, HttpRequest, HttpResponse};

use hh_core::errors::{AuthError, DomainError};
use hh_core::repositories::{BookingRepository, HouseRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, SignupRequest, TokenResponse};
use crate::dto::validate_dto;
use crate::handlers::ApiError;
use crate::middleware::auth::bearer_token;

/// Handler for POST /signup
///
/// Creates an account and echoes the created user (password hash excluded by
/// serialization). A duplicate email is a 409.
pub async fn signup<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    validate_dto(&request.0)?;

    let user = state.auth_service.signup(request.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Handler for POST /login
///
/// Issues a bearer token. Wrong password and unknown email produce the same
/// 401 response.
pub async fn login<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    validate_dto(&request.0)?;

    let token = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Handler for GET /currentuser
///
/// Resolves the bearer token to its full user record. The token is read
/// inline rather than through the middleware because the two failure modes
/// must stay distinct: an invalid token is a 401, a valid token whose user
/// has vanished is a 404.
pub async fn current_user<U, H, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, H, B>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let token = bearer_token(&req)
        .ok_or(ApiError(DomainError::Auth(AuthError::MissingToken)))?;

    let user = state.auth_service.current_user(&token).await?;
    Ok(HttpResponse::Ok().json(user))
}
