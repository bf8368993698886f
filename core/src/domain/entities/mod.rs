//! Domain entities for the House Hunter system.

pub mod booking;
pub mod house;
pub mod token;
pub mod user;
