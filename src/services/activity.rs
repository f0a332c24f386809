// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity orchestration and queries.
//!
//! Handles the core workflow for creating an activity:
//! 1. Resolve creator, activity type, and location references
//! 2. Validate the draft reservation's date and times
//! 3. Resolve the owning team
//! 4. Persist reservation, activity, and (for match-type activities) the
//!    match row in one store transaction
//! 5. Return the fully materialized aggregate
//!
//! Resolution happens before any write, so a missing reference never
//! leaves a partial aggregate behind.

use crate::db::{Database, NewActivity, SortDir, SortField};
use crate::error::{AppError, Result};
use crate::models::activity::{ActivityDraft, ActivityTypeRef};
use crate::models::reservation::LocationRef;
use crate::models::responsibility::ResponsibilityRef;
use crate::models::team::{TeamRef, UserRef};
use crate::models::{
    Activity, ActivityPage, ActivityType, Location, Team, User, MATCH_TYPE_NAME,
};
use crate::time_utils::{parse_reservation_date, parse_reservation_time};

/// Orchestrates activity creation and serves activity queries.
#[derive(Clone)]
pub struct ActivityService {
    db: Database,
}

impl ActivityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // ─── Lookup Resolution ───────────────────────────────────────

    async fn resolve_creator(&self, user: &UserRef) -> Result<User> {
        self.db.get_user(user.user_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("User {} does not exist", user.user_id))
        })
    }

    /// Resolve by id, falling back to the unique type name.
    async fn resolve_activity_type(&self, r: &ActivityTypeRef) -> Result<ActivityType> {
        if let Some(id) = r.activity_type_id {
            if let Some(activity_type) = self.db.get_activity_type(id).await? {
                return Ok(activity_type);
            }
        }
        if let Some(name) = r.activity_type_name.as_deref() {
            if let Some(activity_type) = self.db.get_activity_type_by_name(name).await? {
                return Ok(activity_type);
            }
        }
        Err(AppError::NotFound(
            "Activity type of the given id or name does not exist".to_string(),
        ))
    }

    async fn resolve_location(&self, r: &LocationRef) -> Result<Location> {
        self.db.get_location(r.location_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Location {} does not exist", r.location_id))
        })
    }

    async fn resolve_team(&self, team: &TeamRef) -> Result<Team> {
        self.db.get_team(team.team_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Team {} does not exist", team.team_id))
        })
    }

    // ─── Orchestration ───────────────────────────────────────────

    /// Create an activity from a client draft. Client-supplied
    /// responsibilities or match records are ignored; the match row is
    /// derived from the resolved activity type alone.
    pub async fn create_activity(&self, draft: ActivityDraft) -> Result<Activity> {
        let creator = self.resolve_creator(&draft.creator).await?;
        let activity_type = self.resolve_activity_type(&draft.activity_type).await?;
        let location = self.resolve_location(&draft.reservation.location).await?;

        let reservation_date = parse_reservation_date(&draft.reservation.reservation_date)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid reservation date '{}': expected YYYY-MM-DD",
                    draft.reservation.reservation_date
                ))
            })?;
        let start_time = parse_reservation_time(&draft.reservation.start_time).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid start time '{}': expected HH:MM[:SS]",
                draft.reservation.start_time
            ))
        })?;
        let end_time = parse_reservation_time(&draft.reservation.end_time).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid end time '{}': expected HH:MM[:SS]",
                draft.reservation.end_time
            ))
        })?;

        let team = self.resolve_team(&draft.team).await?;

        // TODO check the location is free in the reservation window once
        // overlapping bookings are rejected (needs a product decision on
        // back-to-back slots).
        let with_match = activity_type.activity_type_name == MATCH_TYPE_NAME;
        let activity_id = self
            .db
            .create_activity(NewActivity {
                activity_type_id: activity_type.activity_type_id,
                reservation_date,
                start_time,
                end_time,
                location_id: location.location_id,
                creator_id: creator.user_id,
                team_id: team.team_id,
                with_match,
            })
            .await?;

        tracing::info!(
            activity_id,
            team_id = team.team_id,
            activity_type = %activity_type.activity_type_name,
            with_match,
            "Activity created"
        );

        self.db.get_activity(activity_id).await?.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Activity {activity_id} missing immediately after insert"
            ))
        })
    }

    /// Attach a responsibility to an activity (no user assigned yet) and
    /// return the updated aggregate.
    pub async fn update_activity_information(
        &self,
        activity_id: i64,
        r: ResponsibilityRef,
    ) -> Result<Activity> {
        let responsibility = self
            .db
            .get_responsibility(r.responsibility_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Responsibility {} does not exist",
                    r.responsibility_id
                ))
            })?;

        if self.db.get_activity(activity_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Activity {activity_id} does not exist"
            )));
        }

        self.db
            .insert_user_responsibility(activity_id, responsibility.responsibility_id, None)
            .await?;

        tracing::debug!(
            activity_id,
            responsibility_id = responsibility.responsibility_id,
            "Responsibility attached to activity"
        );

        self.db.get_activity(activity_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Activity {activity_id} does not exist"))
        })
    }

    // ─── Queries ─────────────────────────────────────────────────

    /// One page of activities, sorted per the raw `sort` query parameter.
    pub async fn get_page_of_activities(
        &self,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<ActivityPage> {
        let order = parse_sort(sort)?;

        if size == 0 {
            return Err(AppError::BadRequest(
                "Page size must be greater than 0".to_string(),
            ));
        }
        let offset = page.checked_mul(size).ok_or_else(|| {
            AppError::BadRequest("Page number causes overflow".to_string())
        })?;

        let activities = self.db.list_activities(&order, size, offset).await?;
        let total_activities = self.db.count_activities().await?;
        let total_pages = total_activities.div_ceil(size as u64);

        Ok(ActivityPage {
            activities,
            current_page: page,
            total_activities,
            total_pages,
        })
    }

    pub async fn get_activity_by_id(&self, activity_id: i64) -> Result<Activity> {
        self.db.get_activity(activity_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Activity {activity_id} does not exist"))
        })
    }

    /// All activities for a team. The team must exist; an existing team
    /// with no activities returns an empty collection.
    pub async fn get_activities_for_team(&self, team_id: i64) -> Result<Vec<Activity>> {
        let team = self.resolve_team(&TeamRef { team_id }).await?;
        self.db.get_activities_for_team(team.team_id).await
    }
}

// ─── Sort Parsing ────────────────────────────────────────────

/// Parse the listing `sort` parameter: comma-joined field/direction pairs
/// ("id,desc" or "id,desc,cancelled,asc"). A trailing field without a
/// direction sorts descending; only the exact string "asc" selects
/// ascending.
fn parse_sort(raw: &str) -> Result<Vec<(SortField, SortDir)>> {
    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();

    let mut order = Vec::new();
    for pair in tokens.chunks(2) {
        let field = parse_sort_field(pair[0])?;
        let dir = match pair.get(1) {
            Some(&"asc") => SortDir::Asc,
            _ => SortDir::Desc,
        };
        order.push((field, dir));
    }
    Ok(order)
}

fn parse_sort_field(field: &str) -> Result<SortField> {
    match field {
        "id" => Ok(SortField::Id),
        "cancelled" | "isCancelled" => Ok(SortField::Cancelled),
        other => Err(AppError::BadRequest(format!(
            "Unsupported sort field: {other}"
        ))),
    }
}
