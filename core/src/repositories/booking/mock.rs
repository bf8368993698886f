//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::errors::DomainError;

use super::trait_::{BookingRepository, InsertOutcome};

/// In-memory booking repository backed by a `HashMap`.
///
/// The uniqueness check and the insert run under a single write guard, so
/// the `(house_id, email)` invariant holds under concurrent callers just as
/// it does with the MySQL unique key.
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn insert_unique(&self, booking: Booking) -> Result<InsertOutcome, DomainError> {
        let mut bookings = self.bookings.write().await;

        if bookings
            .values()
            .any(|b| b.house_id == booking.house_id && b.email == booking.email)
        {
            return Ok(InsertOutcome::Duplicate);
        }

        bookings.insert(booking.id, booking.clone());
        Ok(InsertOutcome::Inserted(booking))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_by_tenant(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.email == email)
            .cloned()
            .collect())
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.owner_email == owner_email)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<bool, DomainError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get_mut(&id) {
            Some(booking) => {
                booking.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.len() as u64)
    }
}
