//! Mock implementation of HouseRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::house::House;
use crate::domain::house_filter::{title_matches, HouseFilter};
use crate::errors::DomainError;

use super::trait_::HouseRepository;

/// In-memory house repository backed by a `HashMap`.
///
/// Filtering goes through [`HouseFilter::matches`], making this the
/// executable reference for the SQL implementation.
pub struct MockHouseRepository {
    houses: Arc<RwLock<HashMap<Uuid, House>>>,
}

impl MockHouseRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            houses: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// All matches in stable page order (creation time, then id)
    async fn matching(&self, filter: &HouseFilter) -> Vec<House> {
        let houses = self.houses.read().await;
        let mut matched: Vec<House> = houses
            .values()
            .filter(|h| filter.matches(h))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        matched
    }
}

impl Default for MockHouseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HouseRepository for MockHouseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<House>, DomainError> {
        let houses = self.houses.read().await;
        Ok(houses.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<House>, DomainError> {
        let houses = self.houses.read().await;
        Ok(houses
            .values()
            .filter(|h| h.owner_email == owner_email)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &HouseFilter) -> Result<u64, DomainError> {
        Ok(self.matching(filter).await.len() as u64)
    }

    async fn find_page(
        &self,
        filter: &HouseFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<House>, DomainError> {
        Ok(self
            .matching(filter)
            .await
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<House>, DomainError> {
        let houses = self.houses.read().await;
        Ok(houses
            .values()
            .filter(|h| title_matches(h, fragment))
            .cloned()
            .collect())
    }

    async fn create(&self, house: House) -> Result<House, DomainError> {
        let mut houses = self.houses.write().await;
        houses.insert(house.id, house.clone());
        Ok(house)
    }

    async fn update(&self, house: House) -> Result<bool, DomainError> {
        let mut houses = self.houses.write().await;
        if !houses.contains_key(&house.id) {
            return Ok(false);
        }
        houses.insert(house.id, house);
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut houses = self.houses.write().await;
        Ok(houses.remove(&id).is_some())
    }
}
