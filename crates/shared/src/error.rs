use serde::{Deserialize, Serialize};

/// Error body the service attaches to every rejection, mirroring the
/// `{"detail": ...}` convention its clients already speak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
