//! Request handling support: error-to-HTTP mapping

pub mod error;

pub use error::ApiError;
