use serde::{Deserialize, Serialize};

use crate::model::entity::RequestStatus;

/// Record counts per lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStats {
    pub pending: u64,
    #[serde(rename = "in-progress")]
    pub in_progress: u64,
    pub done: u64,
}

impl RequestStats {
    /// Adds `count` records in `status`. Unrecognized statuses have no bucket.
    pub fn record(&mut self, status: &RequestStatus, count: u64) {
        match status {
            RequestStatus::Pending => self.pending += count,
            RequestStatus::InProgress => self.in_progress += count,
            RequestStatus::Done => self.done += count,
            RequestStatus::Unrecognized(_) => {}
        }
    }
}
