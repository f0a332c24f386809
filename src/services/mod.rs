// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod responsibility;

pub use activity::ActivityService;
pub use responsibility::ResponsibilityService;
