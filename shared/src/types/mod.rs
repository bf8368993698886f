//! Common type definitions shared across server modules

pub mod pagination;
pub mod response;

pub use pagination::{PagedResponse, PageRequest, PAGE_SIZE};
pub use response::MessageResponse;
