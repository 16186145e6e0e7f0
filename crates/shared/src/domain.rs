use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One extracurricular activity as the service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Signed on purpose: an over-subscribed activity
    /// reports a negative count rather than clamping to zero.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

/// The full activity listing keyed by activity name. An `IndexMap` keeps the
/// server's serialization order, which is the display order.
pub type ActivityCatalog = IndexMap<String, Activity>;
