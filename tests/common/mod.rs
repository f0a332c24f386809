// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use matchday::config::Config;
use matchday::db::Database;
use matchday::routes::create_router;
use matchday::services::{ActivityService, ResponsibilityService};
use matchday::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by an in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = Database::open_in_memory()
        .await
        .expect("Failed to open in-memory database");

    let activities = ActivityService::new(db.clone());
    let responsibilities = ResponsibilityService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        activities,
        responsibilities,
    });

    (create_router(state.clone()), state)
}

/// Reference rows an activity draft points at.
#[allow(dead_code)]
pub struct Seed {
    pub location_id: i64,
    pub match_type_id: i64,
    pub training_type_id: i64,
    pub team_id: i64,
    pub creator_id: i64,
}

/// Insert the reference data every activity draft needs.
#[allow(dead_code)]
pub async fn seed_reference_data(db: &Database) -> Seed {
    let location_id = db.insert_location("Riverside Arena").await.unwrap();
    let match_type_id = db.insert_activity_type("match").await.unwrap();
    let training_type_id = db.insert_activity_type("training").await.unwrap();
    let team_id = db.insert_team("Rovers").await.unwrap();
    let creator_id = db.insert_user("Alex", Some(team_id)).await.unwrap();

    Seed {
        location_id,
        match_type_id,
        training_type_id,
        team_id,
        creator_id,
    }
}

/// A well-formed activity draft body for the given activity type.
#[allow(dead_code)]
pub fn activity_draft(seed: &Seed, activity_type_id: i64) -> Value {
    json!({
        "activityType": {"activityTypeId": activity_type_id},
        "reservation": {
            "reservationDate": "2026-05-02",
            "startTime": "18:00",
            "endTime": "19:30",
            "location": {"locationId": seed.location_id}
        },
        "creator": {"userId": seed.creator_id},
        "team": {"teamId": seed.team_id}
    })
}

#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a draft and return the created activity's id, asserting 201.
#[allow(dead_code)]
pub async fn create_activity(app: &axum::Router, seed: &Seed, activity_type_id: i64) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/api/activities",
        activity_draft(seed, activity_type_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["activityId"].as_i64().unwrap()
}
