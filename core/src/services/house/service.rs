//! Listing catalog: filtered search, title search, and owner-scoped CRUD.

use std::sync::Arc;

use uuid::Uuid;

use hh_shared::types::pagination::{PagedResponse, PageRequest};

use crate::domain::entities::house::{House, HouseFields};
use crate::domain::house_filter::HouseFilter;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::HouseRepository;

/// Service for the listing catalog.
///
/// The filtered search runs one count and one windowed fetch against the
/// same [`HouseFilter`] value, so the reported page math always agrees with
/// the slice. Mutations carry the acting identity and are refused unless it
/// owns the listing.
pub struct HouseService<H>
where
    H: HouseRepository,
{
    house_repository: Arc<H>,
}

impl<H> HouseService<H>
where
    H: HouseRepository,
{
    /// Create a new house service
    pub fn new(house_repository: Arc<H>) -> Self {
        Self { house_repository }
    }

    /// Filtered, paginated search over the catalog.
    ///
    /// Pages hold at most ten listings; a page past the end yields an empty
    /// slice with the same pagination metadata, never an error.
    pub async fn search(
        &self,
        filter: &HouseFilter,
        page: PageRequest,
    ) -> DomainResult<PagedResponse<House>> {
        let total = self.house_repository.count(filter).await?;
        let slice = self
            .house_repository
            .find_page(filter, page.offset(), page.limit())
            .await?;

        tracing::debug!(total, page = page.page, "house search");
        Ok(PagedResponse::new(slice, page, total))
    }

    /// Case-insensitive substring search on listing titles.
    ///
    /// Structurally separate from [`Self::search`]: the two cannot be
    /// combined. An empty fragment returns the whole catalog.
    pub async fn search_by_name(&self, fragment: &str) -> DomainResult<Vec<House>> {
        self.house_repository.search_by_name(fragment).await
    }

    /// Fetch one listing by id
    pub async fn get(&self, id: Uuid) -> DomainResult<House> {
        self.house_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("House"))
    }

    /// All listings belonging to an owner
    pub async fn by_owner(&self, owner_email: &str) -> DomainResult<Vec<House>> {
        self.house_repository.find_by_owner(owner_email).await
    }

    /// Create a listing owned by the acting identity
    pub async fn add(&self, actor_email: &str, fields: HouseFields) -> DomainResult<House> {
        let house = House::new(actor_email.to_string(), fields);
        let created = self.house_repository.create(house).await?;
        tracing::info!(house_id = %created.id, "listing created");
        Ok(created)
    }

    /// Full-field replace of a listing; the actor must own it
    pub async fn update(
        &self,
        actor_email: &str,
        id: Uuid,
        fields: HouseFields,
    ) -> DomainResult<House> {
        let mut house = self.get(id).await?;
        if house.owner_email != actor_email {
            return Err(DomainError::Auth(AuthError::InsufficientPermissions));
        }

        house.replace_fields(fields);
        if !self.house_repository.update(house.clone()).await? {
            return Err(DomainError::not_found("House"));
        }
        Ok(house)
    }

    /// Delete a listing; the actor must own it.
    ///
    /// Bookings referencing the listing are left in place (the source system
    /// had no cascade policy).
    pub async fn delete(&self, actor_email: &str, id: Uuid) -> DomainResult<()> {
        let house = self.get(id).await?;
        if house.owner_email != actor_email {
            return Err(DomainError::Auth(AuthError::InsufficientPermissions));
        }

        if !self.house_repository.delete(id).await? {
            return Err(DomainError::not_found("House"));
        }
        tracing::info!(house_id = %id, "listing deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockHouseRepository;

    const OWNER: &str = "owner@x.com";

    fn service() -> HouseService<MockHouseRepository> {
        HouseService::new(Arc::new(MockHouseRepository::new()))
    }

    fn fields(name: &str, city: &str, rent: i64) -> HouseFields {
        HouseFields {
            house_name: name.to_string(),
            address: "1 Test Lane".to_string(),
            city: city.to_string(),
            bedrooms: 2,
            bathrooms: 1,
            room_size: "800 sqft".to_string(),
            rent_per_month: rent,
            availability_date: "2026-09-01".to_string(),
            picture: None,
            phone_number: "+000".to_string(),
            description: None,
        }
    }

    async fn seed(houses: &HouseService<MockHouseRepository>, n: usize, city: &str) {
        for i in 0..n {
            houses
                .add(OWNER, fields(&format!("House {}", i), city, 1000 + i as i64))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_page_slice_capped_at_ten() {
        let houses = service();
        seed(&houses, 23, "Dhaka").await;

        let page = houses
            .search(&HouseFilter::default(), PageRequest::new(1))
            .await
            .unwrap();
        assert_eq!(page.result.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn test_last_page_holds_remainder() {
        let houses = service();
        seed(&houses, 23, "Dhaka").await;

        let page = houses
            .search(&HouseFilter::default(), PageRequest::new(3))
            .await
            .unwrap();
        assert_eq!(page.result.len(), 3);
        assert_eq!(page.current_page, 3);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty_not_error() {
        let houses = service();
        seed(&houses, 5, "Dhaka").await;

        let page = houses
            .search(&HouseFilter::default(), PageRequest::new(9))
            .await
            .unwrap();
        assert!(page.result.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 9);
    }

    #[tokio::test]
    async fn test_pages_do_not_overlap() {
        let houses = service();
        seed(&houses, 15, "Dhaka").await;

        let first = houses
            .search(&HouseFilter::default(), PageRequest::new(1))
            .await
            .unwrap();
        let second = houses
            .search(&HouseFilter::default(), PageRequest::new(2))
            .await
            .unwrap();

        for house in &second.result {
            assert!(first.result.iter().all(|h| h.id != house.id));
        }
        assert_eq!(first.result.len() + second.result.len(), 15);
    }

    #[tokio::test]
    async fn test_rent_bounds_filter_page_and_count() {
        let houses = service();
        houses.add(OWNER, fields("Cheap", "Dhaka", 400)).await.unwrap();
        houses.add(OWNER, fields("Mid", "Dhaka", 1200)).await.unwrap();
        houses.add(OWNER, fields("Costly", "Dhaka", 2500)).await.unwrap();

        let filter = HouseFilter {
            min_rent: Some(500),
            max_rent: Some(2000),
            ..Default::default()
        };
        let page = houses.search(&filter, PageRequest::new(1)).await.unwrap();
        assert_eq!(page.result.len(), 1);
        assert_eq!(page.result[0].house_name, "Mid");
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_title_search_case_insensitive() {
        let houses = service();
        houses
            .add(OWNER, fields("Sunny Flat", "Dhaka", 1500))
            .await
            .unwrap();
        houses
            .add(OWNER, fields("Lake Villa", "Dhaka", 2500))
            .await
            .unwrap();

        assert_eq!(houses.search_by_name("flat").await.unwrap().len(), 1);
        assert_eq!(houses.search_by_name("SUN").await.unwrap().len(), 1);
        assert_eq!(houses.search_by_name("").await.unwrap().len(), 2);
        assert_eq!(houses.search_by_name("bungalow").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_update_requires_ownership() {
        let houses = service();
        let house = houses.add(OWNER, fields("A", "Dhaka", 1000)).await.unwrap();

        let err = houses
            .update("intruder@x.com", house.id, fields("B", "Dhaka", 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InsufficientPermissions)
        ));

        let updated = houses
            .update(OWNER, house.id, fields("B", "Dhaka", 900))
            .await
            .unwrap();
        assert_eq!(updated.house_name, "B");
        assert_eq!(updated.rent_per_month, 900);
    }

    #[tokio::test]
    async fn test_delete_requires_ownership() {
        let houses = service();
        let house = houses.add(OWNER, fields("A", "Dhaka", 1000)).await.unwrap();

        assert!(houses.delete("intruder@x.com", house.id).await.is_err());
        houses.delete(OWNER, house.id).await.unwrap();
        assert!(matches!(
            houses.get(house.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
