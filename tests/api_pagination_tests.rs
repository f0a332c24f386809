// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Legacy activity listing tests.
//!
//! These tests verify that:
//! 1. Pagination and sorting parameters behave per the documented contract
//! 2. An empty page is a 204, never an empty 200

use axum::http::StatusCode;

mod common;
use common::{body_json, create_activity, seed_reference_data, send};

#[tokio::test]
async fn test_listing_empty_store_is_no_content() {
    let (app, _state) = common::create_test_app().await;

    let response = send(&app, "GET", "/activities/").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_listing_pages_and_sorts_descending() {
    let (app, state) = common::create_test_app().await;
    let seed = seed_reference_data(&state.db).await;
    for _ in 0..4 {
        create_activity(&app, &seed, seed.match_type_id).await;
    }

    let response = send(&app, "GET", "/activities/?page=0&size=3&sort=id,desc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<i64> = body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["activityId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3, 2]);
    assert_eq!(body["currentPage"], 0);
    assert_eq!(body["totalActivities"], 4);
    assert_eq!(body["totalPages"], 2);

    // Last page holds the remainder
    let response = send(&app, "GET", "/activities/?page=1&size=3&sort=id,desc").await;
    let body = body_json(response).await;
    assert_eq!(body["activities"].as_array().unwrap().len(), 1);
    assert_eq!(body["currentPage"], 1);
}

#[tokio::test]
async fn test_listing_defaults() {
    let (app, state) = common::create_test_app().await;
    let seed = seed_reference_data(&state.db).await;
    for _ in 0..4 {
        create_activity(&app, &seed, seed.match_type_id).await;
    }

    // page=0, size=3, sort=id,desc when nothing is passed
    let response = send(&app, "GET", "/activities/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["activities"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["activities"][0]["activityId"].as_i64(),
        Some(4),
        "default sort is id descending"
    );
}

#[tokio::test]
async fn test_listing_ascending_sort() {
    let (app, state) = common::create_test_app().await;
    let seed = seed_reference_data(&state.db).await;
    for _ in 0..3 {
        create_activity(&app, &seed, seed.match_type_id).await;
    }

    let response = send(&app, "GET", "/activities/?sort=id,asc").await;
    let body = body_json(response).await;
    let ids: Vec<i64> = body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["activityId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_listing_past_the_end_is_no_content() {
    let (app, state) = common::create_test_app().await;
    let seed = seed_reference_data(&state.db).await;
    create_activity(&app, &seed, seed.match_type_id).await;

    let response = send(&app, "GET", "/activities/?page=5").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_listing_rejects_unknown_sort_field() {
    let (app, _state) = common::create_test_app().await;

    let response = send(&app, "GET", "/activities/?sort=location,asc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_rejects_zero_size() {
    let (app, _state) = common::create_test_app().await;

    let response = send(&app, "GET", "/activities/?size=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
