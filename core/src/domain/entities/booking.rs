//! Booking entity linking a tenant to a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a booking.
///
/// There is no rejection or cancellation state; a booking either waits for
/// the owner or has been approved. Removal is a hard delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Initial state assigned at creation
    Pending,
    /// Terminal success state set by the owner
    Approved,
}

/// A reservation intent: one tenant asking for one listing.
///
/// At most one booking may exist per `(house_id, email)` pair; the repository
/// layer enforces this with a store-level uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// The listing being booked
    pub house_id: Uuid,

    /// Tenant email
    pub email: String,

    /// Owner email, copied from the listing at creation
    pub owner_email: String,

    /// Current lifecycle state
    pub status: BookingStatus,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new booking in the `Pending` state.
    ///
    /// The status is never caller-supplied; it always starts out pending.
    pub fn new(house_id: Uuid, email: String, owner_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            house_id,
            email,
            owner_email,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Marks the booking approved; a no-op if it already is
    pub fn approve(&mut self) {
        self.status = BookingStatus::Approved;
    }

    /// Checks if the booking has been approved
    pub fn is_approved(&self) -> bool {
        self.status == BookingStatus::Approved
    }
}
