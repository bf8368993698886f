//! Shared utilities and common types for the House Hunter server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types for list endpoints
//! - Common response envelopes

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, DatabaseConfig, ServerConfig};
pub use types::{MessageResponse, PagedResponse, PageRequest, PAGE_SIZE};
