//! Booking repository trait defining the interface for reservation persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::DomainError;

/// Result of an atomic booking insert.
///
/// Two concurrent requests for the same `(house_id, email)` pair must resolve
/// to exactly one `Inserted` and one `Duplicate`; `Duplicate` is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The booking was persisted
    Inserted(Booking),
    /// A booking for the same `(house_id, email)` pair already exists
    Duplicate,
}

/// Repository trait for Booking entity persistence operations
///
/// The at-most-one-booking-per-`(house_id, email)` invariant lives here:
/// `insert_unique` must be atomic with respect to concurrent inserts of the
/// same pair. The MySQL implementation leans on a unique compound key; the
/// mock holds its write lock across the check and the insert.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically insert a booking unless its `(house_id, email)` pair
    /// is already present.
    async fn insert_unique(&self, booking: Booking) -> Result<InsertOutcome, DomainError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// All bookings placed by a tenant, unordered and unpaginated
    async fn find_by_tenant(&self, email: &str) -> Result<Vec<Booking>, DomainError>;

    /// All bookings against an owner's listings, unordered and unpaginated
    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Booking>, DomainError>;

    /// Set the status of a booking.
    ///
    /// Writing the current status again is a no-op with the same result.
    ///
    /// # Returns
    /// * `Ok(true)` - A booking with that id exists
    /// * `Ok(false)` - No booking with that id
    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<bool, DomainError>;

    /// Delete a booking by id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Total number of stored bookings
    async fn count(&self) -> Result<u64, DomainError>;
}
