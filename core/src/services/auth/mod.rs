//! Account and session service.

mod service;

pub use service::{AuthService, SignupData};
