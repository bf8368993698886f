//! HTTP API layer for the House Hunter backend.
//!
//! Route handlers are generic over the repository traits, so integration
//! tests run the full HTTP surface against the in-memory mocks while the
//! binary wires in the MySQL implementations.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
