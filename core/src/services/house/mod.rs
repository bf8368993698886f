//! Listing catalog service.

mod service;

pub use service::HouseService;
