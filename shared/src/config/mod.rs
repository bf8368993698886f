//! Configuration types for the House Hunter server
//!
//! All configuration is environment-driven; each type carries a `from_env`
//! constructor with sensible development defaults.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
