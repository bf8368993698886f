//! Domain layer: entities and the listing query builder.

pub mod entities;
pub mod house_filter;

pub use entities::booking::{Booking, BookingStatus};
pub use entities::house::{House, HouseFields};
pub use entities::token::Claims;
pub use entities::user::{ProfilePatch, User, UserRole};
pub use house_filter::HouseFilter;
