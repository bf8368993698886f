//! Booking conflict guard: creation, approval, and removal of reservations.
//!
//! Creation never pre-reads the store to decide uniqueness; it hands a fully
//! constructed booking to the repository's atomic `insert_unique`, and a
//! duplicate `(house_id, email)` pair comes back as the soft
//! [`BookingOutcome::AlreadyBooked`] outcome. The duplicate case is part of
//! the happy path, not an error.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{BookingRepository, HouseRepository, InsertOutcome};

/// Incoming booking request: a tenant asking for a listing.
///
/// The owner and the initial status are not caller-supplied; the owner is
/// copied from the referenced listing and the status always starts pending.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    /// The listing to book
    #[serde(rename = "houseId")]
    pub house_id: Uuid,
    /// Tenant email
    pub email: String,
}

/// Outcome of a booking creation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The booking was created in the pending state
    Created(Booking),
    /// The tenant already holds a booking for this listing
    AlreadyBooked,
}

/// Service enforcing the one-booking-per-(listing, tenant) invariant and
/// the owner capability checks on booking mutations.
pub struct BookingService<B, H>
where
    B: BookingRepository,
    H: HouseRepository,
{
    booking_repository: Arc<B>,
    house_repository: Arc<H>,
}

impl<B, H> BookingService<B, H>
where
    B: BookingRepository,
    H: HouseRepository,
{
    /// Create a new booking service
    pub fn new(booking_repository: Arc<B>, house_repository: Arc<H>) -> Self {
        Self {
            booking_repository,
            house_repository,
        }
    }

    /// Create a booking for a listing.
    ///
    /// The referenced listing must exist; its owner email is copied onto the
    /// booking. The uniqueness decision is made atomically by the store, so
    /// two concurrent requests for the same pair resolve to exactly one
    /// `Created`.
    pub async fn create(&self, request: BookingRequest) -> DomainResult<BookingOutcome> {
        let house = self
            .house_repository
            .find_by_id(request.house_id)
            .await?
            .ok_or_else(|| DomainError::not_found("House"))?;

        let booking = Booking::new(request.house_id, request.email, house.owner_email);

        match self.booking_repository.insert_unique(booking).await? {
            InsertOutcome::Inserted(created) => {
                tracing::info!(booking_id = %created.id, house_id = %created.house_id, "booking created");
                Ok(BookingOutcome::Created(created))
            }
            InsertOutcome::Duplicate => {
                tracing::debug!(house_id = %request.house_id, "duplicate booking attempt");
                Ok(BookingOutcome::AlreadyBooked)
            }
        }
    }

    /// Approve a booking; only the listing's owner may do this.
    ///
    /// Idempotent: approving an approved booking is a no-op with the same
    /// observable result.
    pub async fn approve(&self, actor_email: &str, id: Uuid) -> DomainResult<Booking> {
        let booking = self.get(id).await?;
        if booking.owner_email != actor_email {
            return Err(DomainError::Auth(AuthError::InsufficientPermissions));
        }

        self.booking_repository
            .set_status(id, BookingStatus::Approved)
            .await?;
        self.get(id).await
    }

    /// Remove a booking; the acting identity must be its tenant or the
    /// listing's owner.
    pub async fn delete(&self, actor_email: &str, id: Uuid) -> DomainResult<()> {
        let booking = self.get(id).await?;
        if booking.email != actor_email && booking.owner_email != actor_email {
            return Err(DomainError::Auth(AuthError::InsufficientPermissions));
        }

        if !self.booking_repository.delete(id).await? {
            return Err(DomainError::not_found("Booking"));
        }
        tracing::info!(booking_id = %id, "booking deleted");
        Ok(())
    }

    /// All bookings placed by a tenant
    pub async fn for_tenant(&self, email: &str) -> DomainResult<Vec<Booking>> {
        self.booking_repository.find_by_tenant(email).await
    }

    /// All bookings against an owner's listings
    pub async fn for_owner(&self, owner_email: &str) -> DomainResult<Vec<Booking>> {
        self.booking_repository.find_by_owner(owner_email).await
    }

    async fn get(&self, id: Uuid) -> DomainResult<Booking> {
        self.booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }
}
