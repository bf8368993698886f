//! House repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::house::House;
use crate::domain::house_filter::HouseFilter;
use crate::errors::DomainError;

/// Repository trait for House entity persistence operations
///
/// The filtered query is split into `count` and `find_page` so the service
/// can report pagination metadata; both take the same [`HouseFilter`] value,
/// which guarantees the count and the slice agree on the match set.
#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// Find a listing by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<House>, DomainError>;

    /// List every house belonging to an owner, unordered
    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<House>, DomainError>;

    /// Count listings matching the filter
    async fn count(&self, filter: &HouseFilter) -> Result<u64, DomainError>;

    /// Fetch one window of listings matching the filter.
    ///
    /// Results are ordered by creation time (then id) so that consecutive
    /// pages never overlap. An offset past the end yields an empty vector.
    async fn find_page(
        &self,
        filter: &HouseFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<House>, DomainError>;

    /// Case-insensitive substring search on the listing title.
    ///
    /// An empty fragment matches all listings.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<House>, DomainError>;

    /// Persist a new listing
    async fn create(&self, house: House) -> Result<House, DomainError>;

    /// Replace an existing listing
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was updated
    /// * `Ok(false)` - No listing with that id
    async fn update(&self, house: House) -> Result<bool, DomainError>;

    /// Delete a listing by id
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - No listing with that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
