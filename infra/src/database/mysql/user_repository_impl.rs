//! MySQL implementation of the UserRepository trait.
//!
//! Duplicate registration is not pre-checked here; the unique key on
//! `users.email` decides, and its violation is translated to the domain's
//! already-exists error. That keeps the check-and-insert atomic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hh_core::domain::entities::user::{User, UserRole};
use hh_core::errors::{AuthError, DomainError};
use hh_core::repositories::UserRepository;

use super::{db_err, is_unique_violation};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn role_to_str(role: UserRole) -> &'static str {
        match role {
            UserRole::Tenant => "tenant",
            UserRole::Owner => "owner",
        }
    }

    fn role_from_str(raw: &str) -> Result<UserRole, DomainError> {
        match raw {
            "tenant" => Ok(UserRole::Tenant),
            "owner" => Ok(UserRole::Owner),
            other => Err(DomainError::Database {
                message: format!("Unknown user role: {}", other),
            }),
        }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_err("Failed to get id", e))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| db_err("Failed to get role", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row
                .try_get("name")
                .map_err(|e| db_err("Failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_err("Failed to get email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_err("Failed to get password_hash", e))?,
            role: Self::role_from_str(&role)?,
            address: row
                .try_get("address")
                .map_err(|e| db_err("Failed to get address", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_err("Failed to get phone", e))?,
            photo: row
                .try_get("photo")
                .map_err(|e| db_err("Failed to get photo", e))?,
            gender: row
                .try_get("gender")
                .map_err(|e| db_err("Failed to get gender", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_err("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_err("Failed to get updated_at", e))?,
        })
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, role, \
                            address, phone, photo, gender, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE email = ? LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Database query failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, name, email, password_hash, role,
                address, phone, photo, gender, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Self::role_to_str(user.role))
            .bind(&user.address)
            .bind(&user.phone)
            .bind(&user.photo)
            .bind(&user.gender)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::Auth(AuthError::UserAlreadyExists))
            }
            Err(e) => Err(db_err("Failed to create user", e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                name = ?,
                email = ?,
                password_hash = ?,
                role = ?,
                address = ?,
                phone = ?,
                photo = ?,
                gender = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Self::role_to_str(user.role))
            .bind(&user.address)
            .bind(&user.phone)
            .bind(&user.photo)
            .bind(&user.gender)
            .bind(now)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        let mut updated = user;
        updated.updated_at = now;
        Ok(updated)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) as user_exists";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err("Failed to check user existence", e))?;

        let exists: i8 = row
            .try_get("user_exists")
            .map_err(|e| db_err("Failed to get existence result", e))?;

        Ok(exists == 1)
    }
}
