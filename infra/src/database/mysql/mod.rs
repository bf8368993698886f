//! MySQL repository implementations

pub mod booking_repository_impl;
pub mod house_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use house_repository_impl::MySqlHouseRepository;
pub use user_repository_impl::MySqlUserRepository;

use hh_core::errors::DomainError;

/// Wrap a SQLx error with a short context label
pub(crate) fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}

/// True when the error is a unique key violation (MySQL error 1062)
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
