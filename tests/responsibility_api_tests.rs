// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Responsibility CRUD endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{body_json, send, send_json};

#[tokio::test]
async fn test_create_responsibility_with_new_sport_roundtrip() {
    let (app, _state) = common::create_test_app().await;

    let response = send_json(
        &app,
        "POST",
        "/api/responsibilities",
        json!({"responsibilityName": "Wash the jerseys", "sport": {"sportName": "Handball"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["responsibilityName"], "Wash the jerseys");
    assert_eq!(body["sport"]["sportName"], "Handball");
    let sport_id = body["sport"]["sportId"].as_i64().unwrap();

    // Listing by the implicitly created sport returns the responsibility
    let response = send(&app, "GET", &format!("/api/responsibilities/sport/{sport_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["responsibilityName"], "Wash the jerseys");
}

#[tokio::test]
async fn test_create_reuses_existing_sport() {
    let (app, _state) = common::create_test_app().await;

    let first = send_json(
        &app,
        "POST",
        "/api/responsibilities",
        json!({"responsibilityName": "Referee snacks", "sport": {"sportName": "Futsal"}}),
    )
    .await;
    let second = send_json(
        &app,
        "POST",
        "/api/responsibilities",
        json!({"responsibilityName": "Score keeping", "sport": {"sportName": "Futsal"}}),
    )
    .await;

    let first = body_json(first).await;
    let second = body_json(second).await;
    assert_eq!(first["sport"]["sportId"], second["sport"]["sportId"]);
}

#[tokio::test]
async fn test_list_by_missing_sport_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = send(&app, "GET", "/api/responsibilities/sport/12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sport_without_responsibilities_is_not_found() {
    let (app, state) = common::create_test_app().await;
    let sport_id = state.db.insert_sport("Cricket").await.unwrap();

    let response = send(&app, "GET", &format!("/api/responsibilities/sport/{sport_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_responsibility_name() {
    let (app, state) = common::create_test_app().await;
    let sport_id = state.db.insert_sport("Handball").await.unwrap();
    let responsibility_id = state
        .db
        .insert_responsibility("Bring balls", sport_id)
        .await
        .unwrap();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/responsibilities/{responsibility_id}"),
        json!({"responsibilityName": "Bring cones"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["responsibilityName"], "Bring cones");
}

#[tokio::test]
async fn test_update_missing_responsibility_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = send_json(
        &app,
        "PUT",
        "/api/responsibilities/99",
        json!({"responsibilityName": "anything"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_responsibility() {
    let (app, state) = common::create_test_app().await;
    let sport_id = state.db.insert_sport("Handball").await.unwrap();
    let responsibility_id = state
        .db
        .insert_responsibility("Bring balls", sport_id)
        .await
        .unwrap();

    let response = send(
        &app,
        "DELETE",
        &format!("/api/responsibilities/{responsibility_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The sport now has no responsibilities
    let response = send(&app, "GET", &format!("/api/responsibilities/sport/{sport_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_responsibility_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = send(&app, "DELETE", "/api/responsibilities/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
