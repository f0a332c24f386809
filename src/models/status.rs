//! Attendance status models.
//!
//! Stored in the schema but not yet written by the activity creation flow;
//! wiring per-user attendance into creation is declared future work.

use serde::{Deserialize, Serialize};

/// A named response state, e.g. "HAS_NOT_ANSWERED".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    pub user_status_id: i64,
    pub status_name: String,
}

/// Per-user response state for an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStatus {
    pub activity_status_id: i64,
    pub user_status_id: i64,
    pub user_id: i64,
    pub activity_id: i64,
}
