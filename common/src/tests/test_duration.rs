// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::serde::duration::{duration_from_str, duration_to_string};
use chrono::Duration;

#[test]
fn format_duration_with_milliseconds() {
    let duration = Duration::hours(1) + Duration::minutes(2) + Duration::milliseconds(2_250);
    assert_eq!(duration_to_string(&duration), "01:02:02.250");
}

#[test]
fn format_duration_longer_than_a_day() {
    let duration = Duration::hours(27) + Duration::seconds(5);
    assert_eq!(duration_to_string(&duration), "27:00:05.000");
}

#[test]
fn format_negative_duration() {
    assert_eq!(duration_to_string(&Duration::seconds(-33)), "-00:00:33.000");
}

#[test]
fn parse_duration_with_and_without_fraction() {
    assert_eq!(
        duration_from_str("00:50:12"),
        Ok(Duration::minutes(50) + Duration::seconds(12))
    );
    assert_eq!(
        duration_from_str("00:00:25.144"),
        Ok(Duration::seconds(25) + Duration::milliseconds(144))
    );
    assert_eq!(
        duration_from_str("00:00:01.5"),
        Ok(Duration::milliseconds(1500))
    );
    assert_eq!(duration_from_str("-00:00:33"), Ok(Duration::seconds(-33)));
}

#[test]
fn parse_invalid_duration() {
    assert!(duration_from_str("12:00").is_err());
    assert!(duration_from_str("00:61:00").is_err());
    assert!(duration_from_str("aa:00:00").is_err());
    assert!(duration_from_str("00:00:01.x").is_err());
}

#[test]
fn parse_out_of_range_duration() {
    assert!(duration_from_str("99999999999999:00:00").is_err());
    assert!(duration_from_str("9223372036854775807:00:00").is_err());
}
