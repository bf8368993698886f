//! Booking conflict guard and workflow.

mod service;

pub use service::{BookingOutcome, BookingRequest, BookingService};
