//! Booking DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use hh_core::services::booking::BookingRequest;

/// Duplicate-booking message returned by POST /mybooking
pub const ALREADY_BOOKED_MESSAGE: &str = "This house already booked";

/// Request body for POST /mybooking.
///
/// Owner and status are never caller-supplied; the owner comes from the
/// referenced listing and the status always starts pending.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingCreateRequest {
    #[serde(rename = "houseId")]
    pub house_id: Uuid,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

impl From<BookingCreateRequest> for BookingRequest {
    fn from(request: BookingCreateRequest) -> Self {
        Self {
            house_id: request.house_id,
            email: request.email,
        }
    }
}
