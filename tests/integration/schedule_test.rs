//! Integration tests for business-hours evaluation.

use chrono::{DateTime, Utc};

use bookwell::schedule::{
    add_days, format_time_in_zone, is_within_business_hours_in,
};

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn new_york_morning_slot_is_accepted() {
    assert!(
        is_within_business_hours_in(
            utc("2024-06-10T12:00:00Z"),
            utc("2024-06-10T13:00:00Z"),
            "America/New_York",
        )
        .unwrap()
    );
}

#[test]
fn new_york_evening_slot_is_rejected() {
    assert!(
        !is_within_business_hours_in(
            utc("2024-06-10T23:00:00Z"),
            utc("2024-06-11T00:00:00Z"),
            "America/New_York",
        )
        .unwrap()
    );
}

#[test]
fn the_same_instants_read_differently_per_timezone() {
    // 12:00Z–13:00Z is morning in New York but 21:00–22:00 in Tokyo.
    let start = utc("2024-06-10T12:00:00Z");
    let end = utc("2024-06-10T13:00:00Z");
    assert!(is_within_business_hours_in(start, end, "America/New_York").unwrap());
    assert!(!is_within_business_hours_in(start, end, "Asia/Tokyo").unwrap());
}

#[test]
fn display_helper_matches_the_evaluators_conversion() {
    // The formatted local time agrees with the in-window decision.
    let start = utc("2024-06-10T12:00:00Z");
    let tz: chrono_tz::Tz = "America/New_York".parse().unwrap();
    assert_eq!(format_time_in_zone(start, tz), "8:00 AM");
}

#[test]
fn shifting_a_slot_by_days_preserves_local_wall_time_outside_dst_changes() {
    let start = utc("2024-06-10T12:00:00Z");
    let next_week = add_days(start, 7);
    assert!(
        is_within_business_hours_in(
            next_week,
            add_days(utc("2024-06-10T13:00:00Z"), 7),
            "America/New_York",
        )
        .unwrap()
    );
}
