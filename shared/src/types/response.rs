//! Common response envelopes for write endpoints

use serde::{Deserialize, Serialize};

/// Plain message envelope used by write endpoints that have no document
/// to echo back (deletes, updates, soft conflicts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
