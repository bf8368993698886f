//! MySQL implementation of the BookingRepository trait.
//!
//! The uniqueness invariant is carried by the `uq_booking_house_tenant`
//! compound key on `(house_id, email)`. `insert_unique` performs a single
//! `INSERT` and translates the key violation to the duplicate outcome, so
//! concurrent inserts of the same pair are serialized by the store, not by
//! application code.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hh_core::domain::entities::booking::{Booking, BookingStatus};
use hh_core::errors::DomainError;
use hh_core::repositories::{BookingRepository, InsertOutcome};

use super::{db_err, is_unique_violation};

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const BOOKING_COLUMNS: &str = "id, house_id, email, owner_email, status, created_at";

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn status_to_str(status: BookingStatus) -> &'static str {
        match status {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
        }
    }

    fn status_from_str(raw: &str) -> Result<BookingStatus, DomainError> {
        match raw {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            other => Err(DomainError::Database {
                message: format!("Unknown booking status: {}", other),
            }),
        }
    }

    /// Convert database row to Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_err("Failed to get id", e))?;
        let house_id: String = row
            .try_get("house_id")
            .map_err(|e| db_err("Failed to get house_id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_err("Failed to get status", e))?;

        let parse_uuid = |raw: &str| {
            Uuid::parse_str(raw).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })
        };

        Ok(Booking {
            id: parse_uuid(&id)?,
            house_id: parse_uuid(&house_id)?,
            email: row
                .try_get("email")
                .map_err(|e| db_err("Failed to get email", e))?,
            owner_email: row
                .try_get("owner_email")
                .map_err(|e| db_err("Failed to get owner_email", e))?,
            status: Self::status_from_str(&status)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to get created_at", e))?,
        })
    }

    async fn fetch_by_column(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE {} = ? ORDER BY created_at, id",
            BOOKING_COLUMNS, column
        );

        let rows = sqlx::query(&query)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn insert_unique(&self, booking: Booking) -> Result<InsertOutcome, DomainError> {
        let query = r#"
            INSERT INTO bookings (
                id, house_id, email, owner_email, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.house_id.to_string())
            .bind(&booking.email)
            .bind(&booking.owner_email)
            .bind(Self::status_to_str(booking.status))
            .bind(booking.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(booking)),
            Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(db_err("Failed to create booking", e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? LIMIT 1",
            BOOKING_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_tenant(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        self.fetch_by_column("email", email).await
    }

    async fn find_by_owner(&self, owner_email: &str) -> Result<Vec<Booking>, DomainError> {
        self.fetch_by_column("owner_email", owner_email).await
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<bool, DomainError> {
        // rows_affected would be 0 for a same-status write under MySQL's
        // default CLIENT_FOUND_ROWS behavior, so match on id existence instead
        let query = r#"
            UPDATE bookings SET status = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(Self::status_to_str(status))
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update booking status", e))?;

        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM bookings WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err("Failed to count bookings", e))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| db_err("Failed to get count", e))?;

        Ok(count as u64)
    }
}
