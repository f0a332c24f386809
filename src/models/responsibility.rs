// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Responsibility and sport models.

use serde::{Deserialize, Serialize};

/// A named role/duty assignable to a user within an activity, scoped to a
/// sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsibility {
    pub responsibility_id: i64,
    pub responsibility_name: String,
    pub sport: Sport,
}

/// Parent of responsibilities. Implicitly created by name when a
/// responsibility references a sport that does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub sport_id: i64,
    pub sport_name: String,
}

/// Reference to an existing responsibility by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityRef {
    pub responsibility_id: i64,
}

/// Client-submitted responsibility draft; the sport is resolved (or
/// created) by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityDraft {
    pub responsibility_name: String,
    pub sport: SportRef,
}

/// Reference to a sport by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportRef {
    pub sport_name: String,
}

/// Rename patch for an existing responsibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityPatch {
    pub responsibility_name: String,
}
