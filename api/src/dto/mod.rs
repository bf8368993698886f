//! Request and response DTOs for the HTTP surface

pub mod auth;
pub mod booking;
pub mod house;
pub mod user;

use validator::{Validate, ValidationErrors};

use hh_core::errors::DomainError;

/// Run `validator` checks and collapse failures into a single
/// `DomainError::Validation` (rendered as 400 at the boundary).
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), DomainError> {
    dto.validate().map_err(|errors| DomainError::Validation {
        message: render_errors(&errors),
    })
}

fn render_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let detail = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            format!("{}: {}", field, detail)
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
