// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity aggregate model for storage and API.
//!
//! The store always returns fully materialized aggregates: an [`Activity`]
//! carries its type, reservation (with location), creator, team, optional
//! match record, and responsibility assignments.

use serde::{Deserialize, Serialize};

use crate::models::reservation::{LocationRef, Reservation};
use crate::models::responsibility::Responsibility;
use crate::models::team::{Team, TeamRef, User, UserRef};

/// Activity type name that triggers creation of a [`Match`] record.
pub const MATCH_TYPE_NAME: &str = "match";

/// A scheduled sports event instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: i64,
    /// Kind of event ("match", "training", ...)
    pub activity_type: ActivityType,
    /// The location+time booking backing this activity (owned 1:1)
    pub reservation: Reservation,
    /// User who created the activity
    pub creator: User,
    /// Team the activity belongs to
    pub team: Team,
    pub is_cancelled: bool,
    /// Present iff the activity type is "match"
    pub r#match: Option<Match>,
    /// Who is responsible for what on this activity
    pub user_responsibilities: Vec<UserResponsibility>,
}

/// Kind of activity, resolved by id or unique name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    pub activity_type_id: i64,
    pub activity_type_name: String,
}

/// Specialization record created when an activity's type is "match".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: i64,
    /// Back-reference to the owning activity
    pub activity_id: i64,
}

/// Association of a responsibility (and optionally a user) to an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponsibility {
    pub user_responsibility_id: i64,
    pub activity_id: i64,
    pub responsibility: Responsibility,
    /// None until a team member takes the duty
    pub user: Option<User>,
}

// ─── Request DTOs ────────────────────────────────────────────

/// Client-submitted activity draft. Embedded references carry only the
/// fields needed to resolve the stored entity; anything else the client
/// sends (responsibilities, match) is ignored by the orchestration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub activity_type: ActivityTypeRef,
    pub reservation: ReservationDraft,
    pub creator: UserRef,
    pub team: TeamRef,
}

/// Reference to an activity type, by id or by unique name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeRef {
    pub activity_type_id: Option<i64>,
    pub activity_type_name: Option<String>,
}

/// Draft reservation. Date and times arrive as strings and are parsed by
/// the orchestration so malformed input fails before any write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    /// ISO 8601 date, e.g. "2026-03-14"
    pub reservation_date: String,
    /// "HH:MM:SS"
    pub start_time: String,
    pub end_time: String,
    pub location: LocationRef,
}

/// Paged activity listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPage {
    pub activities: Vec<Activity>,
    pub current_page: u32,
    pub total_activities: u64,
    pub total_pages: u64,
}
