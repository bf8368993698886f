//! # Infrastructure Layer
//!
//! Concrete persistence for the House Hunter backend: MySQL implementations
//! of the core repository traits, plus connection pool management and schema
//! bootstrap.
//!
//! The store-level guarantees the domain relies on live here:
//! - `users.email` carries a unique key, backing duplicate-signup rejection
//! - `bookings(house_id, email)` carries a unique compound key, backing the
//!   one-booking-per-listing-per-tenant invariant under concurrency

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlBookingRepository, MySqlHouseRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
