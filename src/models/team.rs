//! Team and user models.

use serde::{Deserialize, Serialize};

/// A team owning activities; members are users whose `team_id` points here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
}

/// A user; activity creator or team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    /// Team the user plays for, if any
    pub team_id: Option<i64>,
}

/// Reference to an existing user by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: i64,
}

/// Reference to an existing team by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub team_id: i64,
}
