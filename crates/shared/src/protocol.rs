use serde::{Deserialize, Serialize};

/// Success body for the mutating endpoints: a single human-readable line the
/// front-end displays verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
