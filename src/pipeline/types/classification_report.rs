use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::ClassificationResult;

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub frame_id: Uuid,
    pub source: String,
    pub received_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub result: ClassificationResult,
}

impl ClassificationReport {
    pub fn elapsed_ms(&self) -> i64 {
        (self.completed_at - self.received_at).num_milliseconds()
    }
}
