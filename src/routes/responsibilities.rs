// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Responsibility routes.

use crate::error::Result;
use crate::models::responsibility::{ResponsibilityDraft, ResponsibilityPatch};
use crate::models::Responsibility;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/responsibilities", post(create_responsibility))
        .route(
            "/api/responsibilities/{responsibility_id}",
            put(update_responsibility).delete(delete_responsibility),
        )
        .route(
            "/api/responsibilities/sport/{sport_id}",
            get(get_responsibilities_by_sport),
        )
}

async fn get_responsibilities_by_sport(
    State(state): State<Arc<AppState>>,
    Path(sport_id): Path<i64>,
) -> Result<Json<Vec<Responsibility>>> {
    let responsibilities = state.responsibilities.list_by_sport(sport_id).await?;
    Ok(Json(responsibilities))
}

async fn create_responsibility(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ResponsibilityDraft>,
) -> Result<Response> {
    let responsibility = state.responsibilities.create(draft).await?;
    Ok((StatusCode::CREATED, Json(responsibility)).into_response())
}

async fn update_responsibility(
    State(state): State<Arc<AppState>>,
    Path(responsibility_id): Path<i64>,
    Json(patch): Json<ResponsibilityPatch>,
) -> Result<Json<Responsibility>> {
    let responsibility = state
        .responsibilities
        .update(responsibility_id, patch)
        .await?;
    Ok(Json(responsibility))
}

async fn delete_responsibility(
    State(state): State<Arc<AppState>>,
    Path(responsibility_id): Path<i64>,
) -> Result<StatusCode> {
    state.responsibilities.delete(responsibility_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
