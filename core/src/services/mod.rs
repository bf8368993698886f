//! Business services for accounts, sessions, listings, and bookings.

pub mod auth;
pub mod booking;
pub mod house;
pub mod token;

pub use auth::AuthService;
pub use booking::{BookingOutcome, BookingRequest, BookingService};
pub use house::HouseService;
pub use token::TokenService;
