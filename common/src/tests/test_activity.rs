// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    activity::{Activity, ActivityError},
    position::Position,
    sample::Sample,
    test_helper::activity::{get_line_samples, get_roubaix_activity, start_time},
};
use chrono::Duration;

#[test]
fn empty_sample_list_is_rejected() {
    assert_eq!(Activity::new(vec![]), Err(ActivityError::Empty));
}

#[test]
fn decreasing_timestamp_is_rejected() {
    let samples = vec![
        Sample::new(start_time(), 52.0, 11.0),
        Sample::new(start_time() + Duration::seconds(2), 52.0001, 11.0),
        Sample::new(start_time() + Duration::seconds(1), 52.0002, 11.0),
    ];
    let err = Activity::new(samples).expect_err("decreasing timestamps must be rejected");
    assert_eq!(
        err,
        ActivityError::NotChronological {
            index: 2,
            timestamp: start_time() + Duration::seconds(1),
            previous: start_time() + Duration::seconds(2),
        }
    );
}

#[test]
fn duplicate_timestamps_are_accepted() {
    let samples = vec![
        Sample::new(start_time(), 52.0, 11.0),
        Sample::new(start_time(), 52.0001, 11.0),
    ];
    let activity = Activity::new(samples).unwrap_or_else(|e| panic!("Unexpected error: {e}"));
    assert_eq!(activity.len(), 2);
}

#[test]
fn non_finite_position_is_rejected() {
    let samples = vec![
        Sample::new(start_time(), 52.0, 11.0),
        Sample::new(start_time(), f64::NAN, 11.0),
    ];
    assert!(matches!(
        Activity::new(samples),
        Err(ActivityError::InvalidPosition { index: 1, .. })
    ));
}

#[test]
fn last_sample_is_its_own_successor() {
    let samples = get_line_samples(Position::new(52.0, 11.0), Position::new(52.001, 11.0), 4);
    let activity = Activity::new(samples.clone()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(*activity.successor(0), samples[1]);
    assert_eq!(*activity.successor(4), samples[4]);
}

#[test]
fn envelope_covers_all_samples() {
    let envelope = get_roubaix_activity().envelope();
    assert_eq!(envelope.min, Position::new(40.1150, -105.258836));
    assert_eq!(envelope.max, Position::new(40.1273, -105.2478));
    assert!(envelope.contains(&Position::new(40.12, -105.25)));
    assert!(envelope.contains(&envelope.min));
    assert!(!envelope.contains(&Position::new(40.2, -105.25)));
}
