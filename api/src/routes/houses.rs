//! Listing route handlers
//!
//! - GET /houses (filtered, paginated)
//! - GET /housesearch/{text} (title substring)
//! - GET /house/{id}
//! - GET /ownhouse/{email}
//! - POST /addhouse
//! - PUT /updatehouse/{id}
//! - DELETE /deletehouse/{id}

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hh_core::domain::entities::user::UserRole;
use hh_core::errors::{AuthError, DomainError};
use hh_core::repositories::{BookingRepository, HouseRepository, UserRepository};
use hh_shared::types::response::MessageResponse;

use crate::app::AppState;
use crate::dto::house::{HouseRequest, HouseSearchQuery};
use crate::dto::validate_dto;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /houses
///
/// Composable filters plus fixed-size pagination. Parsing is lenient: an
/// unparseable numeric parameter relaxes its criterion instead of rejecting
/// the request, and an out-of-range page yields an empty slice.
pub async fn search_houses<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let query = HouseSearchQuery::from_params(&query);
    let page = state.house_service.search(&query.filter, query.page).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Handler for GET /housesearch/{text}
///
/// The tail match allows an empty fragment, which returns the whole catalog.
pub async fn search_by_name<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let houses = state.house_service.search_by_name(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(houses))
}

/// Handler for GET /house/{id}
pub async fn get_house<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let house = state.house_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(house))
}

/// Handler for GET /ownhouse/{email}
pub async fn own_houses<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let houses = state.house_service.by_owner(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(houses))
}

/// Handler for POST /addhouse
///
/// Requires an owner account; the listing is attributed to the authenticated
/// identity, never to a caller-supplied owner field.
pub async fn add_house<U, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<HouseRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    if auth.role != UserRole::Owner {
        return Err(ApiError(DomainError::Auth(AuthError::InsufficientPermissions)));
    }

    validate_dto(&request.0)?;

    let house = state
        .house_service
        .add(&auth.email, request.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(house))
}

/// Handler for PUT /updatehouse/{id}
pub async fn update_house<U, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
    request: web::Json<HouseRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    validate_dto(&request.0)?;

    let house = state
        .house_service
        .update(&auth.email, path.into_inner(), request.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(house))
}

/// Handler for DELETE /deletehouse/{id}
///
/// Bookings referencing the listing are left in place.
pub async fn delete_house<U, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    state
        .house_service
        .delete(&auth.email, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("House deleted")))
}
