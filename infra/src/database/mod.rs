//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management, schema bootstrap, and the repository
//! implementations backing the core domain traits.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlBookingRepository, MySqlHouseRepository, MySqlUserRepository};
