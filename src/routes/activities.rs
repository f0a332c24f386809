// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes.
//!
//! The `/activities/` listing predates the `/api` prefix and keeps its
//! original path and response shape for existing clients.

use crate::error::Result;
use crate::models::activity::ActivityDraft;
use crate::models::responsibility::ResponsibilityRef;
use crate::models::Activity;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(create_activity))
        .route(
            "/api/activities/{activity_id}",
            get(get_activity_by_id).put(update_activity_information),
        )
        .route(
            "/api/activities/teamActivities/{team_id}",
            get(get_activities_for_team),
        )
        .route("/activities/", get(get_page_of_activities))
}

// ─── Creation & Update ───────────────────────────────────────

/// Create an activity from a draft.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ActivityDraft>,
) -> Result<Response> {
    let activity = state.activities.create_activity(draft).await?;
    Ok((StatusCode::CREATED, Json(activity)).into_response())
}

/// Attach a responsibility to an activity.
async fn update_activity_information(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<i64>,
    Json(responsibility): Json<ResponsibilityRef>,
) -> Result<Response> {
    let activity = state
        .activities
        .update_activity_information(activity_id, responsibility)
        .await?;
    Ok((StatusCode::CREATED, Json(activity)).into_response())
}

// ─── Queries ─────────────────────────────────────────────────

async fn get_activity_by_id(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<i64>,
) -> Result<Json<Activity>> {
    let activity = state.activities.get_activity_by_id(activity_id).await?;
    Ok(Json(activity))
}

/// Activities of a team: 404 for a missing team, 204 for an existing team
/// with no activities.
async fn get_activities_for_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
) -> Result<Response> {
    let activities = state.activities.get_activities_for_team(team_id).await?;
    if activities.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(activities).into_response())
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_size")]
    size: u32,
    /// Comma-joined field/direction pairs, e.g. "id,desc"
    sort: Option<String>,
}

fn default_size() -> u32 {
    3
}

const DEFAULT_SORT: &str = "id,desc";

/// Paged listing; 204 when the requested page is empty.
async fn get_page_of_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Result<Response> {
    tracing::debug!(
        page = params.page,
        size = params.size,
        sort = ?params.sort,
        "Listing activities"
    );

    let sort = params.sort.as_deref().unwrap_or(DEFAULT_SORT);
    let page = state
        .activities
        .get_page_of_activities(params.page, params.size, sort)
        .await?;

    if page.activities.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(page).into_response())
}
