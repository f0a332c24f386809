// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Matchday: scheduling backend for team sports activities
//!
//! This crate provides the backend API for booking locations, creating
//! activities (matches, trainings, ...) and managing per-activity
//! responsibilities.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Database;
use services::{ActivityService, ResponsibilityService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub activities: ActivityService,
    pub responsibilities: ResponsibilityService,
}
