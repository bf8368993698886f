//! Repository interfaces and in-memory implementations.
//!
//! The traits define the persistence contract consumed by the services; the
//! MySQL implementations live in the infrastructure crate, the in-memory
//! mocks here double as the test store and the reference semantics.

pub mod booking;
pub mod house;
pub mod user;

pub use booking::{BookingRepository, InsertOutcome, MockBookingRepository};
pub use house::{HouseRepository, MockHouseRepository};
pub use user::{MockUserRepository, UserRepository};
