// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQL schema for the matchday store.
//!
//! Executed once at connection startup; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`.

/// Full schema DDL.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS sports (
    sport_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    sport_name  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS locations (
    location_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    location_name  TEXT NOT NULL
);

-- The name 'match' is reserved: activities of that type get a matches row.
CREATE TABLE IF NOT EXISTS activity_types (
    activity_type_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    activity_type_name  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS teams (
    team_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    team_name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    user_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    user_name  TEXT NOT NULL,
    team_id    INTEGER REFERENCES teams(team_id)
);

-- Owned 1:1 by an activity; created together with it.
CREATE TABLE IF NOT EXISTS reservations (
    reservation_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    reservation_date  TEXT NOT NULL,   -- ISO 8601 date
    start_time        TEXT NOT NULL,   -- HH:MM:SS
    end_time          TEXT NOT NULL,
    location_id       INTEGER NOT NULL REFERENCES locations(location_id)
);

CREATE TABLE IF NOT EXISTS activities (
    activity_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    activity_type_id  INTEGER NOT NULL REFERENCES activity_types(activity_type_id),
    reservation_id    INTEGER NOT NULL REFERENCES reservations(reservation_id),
    creator_id        INTEGER NOT NULL REFERENCES users(user_id),
    team_id           INTEGER NOT NULL REFERENCES teams(team_id),
    is_cancelled      INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS matches (
    match_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    activity_id  INTEGER NOT NULL UNIQUE REFERENCES activities(activity_id)
);

CREATE TABLE IF NOT EXISTS responsibilities (
    responsibility_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    responsibility_name  TEXT NOT NULL,
    sport_id             INTEGER NOT NULL REFERENCES sports(sport_id)
);

-- 'Who is responsible for what' on an activity; user may be unassigned.
CREATE TABLE IF NOT EXISTS user_responsibilities (
    user_responsibility_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    activity_id             INTEGER NOT NULL REFERENCES activities(activity_id),
    responsibility_id       INTEGER NOT NULL REFERENCES responsibilities(responsibility_id),
    user_id                 INTEGER REFERENCES users(user_id)
);

CREATE TABLE IF NOT EXISTS user_statuses (
    user_status_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    status_name     TEXT NOT NULL UNIQUE
);

-- Per-user attendance state for an activity. Stored but not yet written
-- by the creation flow.
CREATE TABLE IF NOT EXISTS activity_statuses (
    activity_status_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    user_status_id      INTEGER NOT NULL REFERENCES user_statuses(user_status_id),
    user_id             INTEGER NOT NULL REFERENCES users(user_id),
    activity_id         INTEGER NOT NULL REFERENCES activities(activity_id)
);

CREATE INDEX IF NOT EXISTS activities_team_idx ON activities(team_id);
CREATE INDEX IF NOT EXISTS user_responsibilities_activity_idx
    ON user_responsibilities(activity_id);
CREATE INDEX IF NOT EXISTS responsibilities_sport_idx
    ON responsibilities(sport_id);

INSERT OR IGNORE INTO user_statuses (status_name) VALUES ('HAS_NOT_ANSWERED');
";
