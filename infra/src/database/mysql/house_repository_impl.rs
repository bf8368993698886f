//! MySQL implementation of the HouseRepository trait.
//!
//! The filtered search renders a [`HouseFilter`] as a dynamic `WHERE` clause
//! with `QueryBuilder`. `count` and `find_page` share the same rendering, so
//! the reported total and the page slice are computed over one match set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use hh_core::domain::entities::house::House;
use hh_core::domain::house_filter::HouseFilter;
use hh_core::errors::DomainError;
use hh_core::repositories::HouseRepository;

use super::db_err;

/// MySQL implementation of HouseRepository
pub struct MySqlHouseRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const HOUSE_COLUMNS: &str = "id, owner_email, house_name, address, city, bedrooms, bathrooms, \
                             room_size, rent_per_month, availability_date, picture, \
                             phone_number, description, created_at";

impl MySqlHouseRepository {
    /// Create a new MySQL house repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to House entity
    fn row_to_house(row: &sqlx::mysql::MySqlRow) -> Result<House, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_err("Failed to get id", e))?;

        Ok(House {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            owner_email: row
                .try_get("owner_email")
                .map_err(|e| db_err("Failed to get owner_email", e))?,
            house_name: row
                .try_get("house_name")
                .map_err(|e| db_err("Failed to get house_name", e))?,
            address: row
                .try_get("address")
                .map_err(|e| db_err("Failed to get address", e))?,
            city: row
                .try_get("city")
                .map_err(|e| db_err("Failed to get city", e))?,
            bedrooms: row
                .try_get("bedrooms")
                .map_err(|e| db_err("Failed to get bedrooms", e))?,
            bathrooms: row
                .try_get("bathrooms")
                .map_err(|e| db_err("Failed to get bathrooms", e))?,
            room_size: row
                .try_get("room_size")
                .map_err(|e| db_err("Failed to get room_size", e))?,
            rent_per_month: row
                .try_get("rent_per_month")
                .map_err(|e| db_err("Failed to get rent_per_month", e))?,
            availability_date: row
                .try_get("availability_date")
                .map_err(|e| db_err("Failed to get availability_date", e))?,
            picture: row
                .try_get("picture")
                .map_err(|e| db_err("Failed to get picture", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| db_err("Failed to get phone_number", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_err("Failed to get description", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to get created_at", e))?,
        })
    }

    /// Render the supplied criteria as `WHERE` conditions.
    ///
    /// Must stay in lockstep with [`HouseFilter::matches`], which defines the
    /// canonical semantics.
    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: &HouseFilter) {
        builder.push(" WHERE 1=1");
        if let Some(city) = &filter.city {
            builder.push(" AND city = ").push_bind(city.clone());
        }
        if let Some(bedrooms) = filter.bedrooms {
            builder.push(" AND bedrooms = ").push_bind(bedrooms);
        }
        if let Some(bathrooms) = filter.bathrooms {
            builder.push(" AND bathrooms = ").push_bind(bathrooms);
        }
        if let Some(room_size) = &filter.room_size {
            builder.push(" AND room_size = ").push_bind(room_size.clone());
        }
        if let Some(date) = &filter.availability_date {
            builder
                .push(" AND availability_date = ")
                .push_bind(date.clone());
        }
        if let Some(min) = filter.min_rent {
            builder.push(" AND rent_per_month >= ").push_bind(min);
        }
        if let Some(max) = filter.max_rent {
            builder.push(" AND rent_per_month <= ").push_bind(max);
        }
    }

    async fn fetch_houses(
        &self,
        builder: &mut QueryBuilder<'_, MySql>,
    ) -> Result<Vec<House>, DomainError> {
        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_house).collect()
    }
}

#[async_trait]
impl HouseRepository for MySqlHouseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<House>, DomainError> {
        let query = format!("SELECT {} FROM houses WHERE id = ? LIMIT 1", HOUSE_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_house(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<House>, DomainError> {
        let query = format!(
            "SELECT {} FROM houses WHERE owner_email = ? ORDER BY created_at, id",
            HOUSE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(owner_email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_house).collect()
    }

    async fn count(&self, filter: &HouseFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) as count FROM houses");
        Self::push_filter(&mut builder, filter);

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err("Failed to count houses", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_err("Failed to get count", e))?;

        Ok(count as u64)
    }

    async fn find_page(
        &self,
        filter: &HouseFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<House>, DomainError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM houses", HOUSE_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at, id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        self.fetch_houses(&mut builder).await
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<House>, DomainError> {
        // Escape LIKE wildcards so the fragment is matched literally
        let escaped = fragment
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{}%", escaped.to_lowercase());

        let query = format!(
            "SELECT {} FROM houses WHERE LOWER(house_name) LIKE ? ORDER BY created_at, id",
            HOUSE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_house).collect()
    }

    async fn create(&self, house: House) -> Result<House, DomainError> {
        let query = r#"
            INSERT INTO houses (
                id, owner_email, house_name, address, city, bedrooms, bathrooms,
                room_size, rent_per_month, availability_date, picture,
                phone_number, description, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(house.id.to_string())
            .bind(&house.owner_email)
            .bind(&house.house_name)
            .bind(&house.address)
            .bind(&house.city)
            .bind(house.bedrooms)
            .bind(house.bathrooms)
            .bind(&house.room_size)
            .bind(house.rent_per_month)
            .bind(&house.availability_date)
            .bind(&house.picture)
            .bind(&house.phone_number)
            .bind(&house.description)
            .bind(house.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to create house", e))?;

        Ok(house)
    }

    async fn update(&self, house: House) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE houses SET
                house_name = ?,
                address = ?,
                city = ?,
                bedrooms = ?,
                bathrooms = ?,
                room_size = ?,
                rent_per_month = ?,
                availability_date = ?,
                picture = ?,
                phone_number = ?,
                description = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&house.house_name)
            .bind(&house.address)
            .bind(&house.city)
            .bind(house.bedrooms)
            .bind(house.bathrooms)
            .bind(&house.room_size)
            .bind(house.rent_per_month)
            .bind(&house.availability_date)
            .bind(&house.picture)
            .bind(&house.phone_number)
            .bind(&house.description)
            .bind(house.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update house", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM houses WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete house", e))?;

        Ok(result.rows_affected() > 0)
    }
}
