// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for reservation date/time parsing.

use chrono::{NaiveDate, NaiveTime};

/// Parse an ISO 8601 calendar date ("2026-03-14").
pub fn parse_reservation_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a time of day, with or without seconds ("19:30" or "19:30:00").
pub fn parse_reservation_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_reservation_date("2026-03-14").is_some());
        assert!(parse_reservation_date("14/03/2026").is_none());
        assert!(parse_reservation_date("2026-13-40").is_none());
    }

    #[test]
    fn test_parse_time_with_and_without_seconds() {
        assert_eq!(
            parse_reservation_time("19:30"),
            parse_reservation_time("19:30:00")
        );
        assert!(parse_reservation_time("25:00").is_none());
        assert!(parse_reservation_time("half past seven").is_none());
    }
}
