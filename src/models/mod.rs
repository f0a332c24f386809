// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod reservation;
pub mod responsibility;
pub mod status;
pub mod team;

pub use activity::{
    Activity, ActivityDraft, ActivityPage, ActivityType, Match, UserResponsibility,
    MATCH_TYPE_NAME,
};
pub use reservation::{Location, Reservation};
pub use responsibility::{Responsibility, Sport};
pub use status::{ActivityStatus, UserStatus};
pub use team::{Team, User};
