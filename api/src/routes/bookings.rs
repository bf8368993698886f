//! Booking route handlers
//!
//! - POST /mybooking (conflict guard)
//! - GET /mybooking/{email}
//! - GET /bookedhouse/{email}
//! - PATCH /approvedbooking/{id}
//! - DELETE /booking/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hh_core::repositories::{BookingRepository, HouseRepository, UserRepository};
use hh_core::services::booking::BookingOutcome;
use hh_shared::types::response::MessageResponse;

use crate::app::AppState;
use crate::dto::booking::{BookingCreateRequest, ALREADY_BOOKED_MESSAGE};
use crate::dto::validate_dto;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /mybooking
///
/// First booking for a `(houseId, email)` pair is created pending (201);
/// a repeat attempt is acknowledged with the conflict message at 200, not an
/// error status. Nothing is written in the duplicate case.
pub async fn create_booking<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<BookingCreateRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    validate_dto(&request.0)?;

    let outcome = state
        .booking_service
        .create(request.into_inner().into())
        .await?;

    Ok(match outcome {
        BookingOutcome::Created(booking) => HttpResponse::Created().json(booking),
        BookingOutcome::AlreadyBooked => {
            HttpResponse::Ok().json(MessageResponse::new(ALREADY_BOOKED_MESSAGE))
        }
    })
}

/// Handler for GET /mybooking/{email}
pub async fn tenant_bookings<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let bookings = state
        .booking_service
        .for_tenant(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Handler for GET /bookedhouse/{email}
pub async fn owner_bookings<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let bookings = state.booking_service.for_owner(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Handler for PATCH /approvedbooking/{id}
///
/// Only the listing's owner may approve; approving twice is a no-op.
pub async fn approve_booking<U, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<U, H, B>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HouseRepository + 'static,
    B: BookingRepository + 'static,
{
    let booking = state
        .booking_service
        .approve(&auth.email, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Handler for DELETE /booking/{id}
///
/// Allowed for the booking's tenant or the listing's owner.
pub async fn delete_booking<U, H, B>(
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
        .booking_service
        .delete(&auth.email, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Booking deleted")))
}
