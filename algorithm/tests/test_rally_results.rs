// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{
    config::MatchConfig,
    error::{MatchError, RallyError},
    matcher::{CheckpointMatcher, assign_segments},
    rally_results,
};
use chrono::Duration;
use common::{
    checkpoint::{Checkpoint, CheckpointKind},
    position::Position,
    result::SegmentResult,
    test_helper::{activity::get_roubaix_activity, route::get_route},
};

fn hms(hours: i64, minutes: i64, seconds: i64) -> Duration {
    Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds)
}

fn get_roubaix_results() -> Vec<SegmentResult> {
    rally_results(
        &CheckpointMatcher::default(),
        &get_roubaix_activity(),
        &get_route().checkpoints,
    )
    .unwrap_or_else(|e| panic!("Failed to compute the roubaix results. Reason: {e}"))
}

#[test_log::test]
fn roubaix_ride_results() {
    let results = get_roubaix_results();
    assert_eq!(results[0].duration, Some(hms(1, 2, 2)));
    assert_eq!(results[0].total_timed, Duration::zero());
    assert_eq!(results[1].duration, Some(hms(0, 0, 33)));
    assert_eq!(results[1].total_timed, Duration::zero());
    assert_eq!(results[2].duration, Some(hms(0, 50, 12)));
    assert_eq!(results[2].total_timed, hms(0, 50, 12));
    assert_eq!(results[3].total_timed, hms(0, 50, 12));
    assert_eq!(results[3].duration, None);
    assert_eq!(results[3].checkpoint.name, "Finish");
    assert_eq!(
        results[3].checkpoint.location,
        Position::new(40.116263, -105.257817)
    );
    assert_eq!(results[3].checkpoint.kind, CheckpointKind::End);
}

#[test_log::test]
fn roubaix_matches_are_monotonic() {
    let activity = get_roubaix_activity();
    let matches = CheckpointMatcher::default()
        .match_checkpoints(&activity, &get_route().checkpoints)
        .unwrap_or_else(|e| panic!("Unexpected match error: {e}"));
    assert_eq!(
        matches.iter().map(|m| m.sample_index).collect::<Vec<_>>(),
        vec![0, 4, 5, 9]
    );
    assert!(matches.windows(2).all(|w| w[0].sample_index <= w[1].sample_index));
    assert_eq!(
        assign_segments(&matches, activity.len()),
        vec![
            Some(0),
            Some(0),
            Some(0),
            Some(0),
            Some(1),
            Some(2),
            Some(2),
            Some(2),
            Some(2),
            None,
            None
        ]
    );
}

#[test]
fn roubaix_results_satisfy_accumulation_law() {
    let route = get_route();
    let results = get_roubaix_results();
    assert_eq!(results.len(), route.checkpoints.len());

    let mut expected_total = Duration::zero();
    for (index, result) in results.iter().enumerate() {
        assert_eq!(result.checkpoint, route.checkpoints[index]);
        if let Some(duration) = result.duration {
            assert!(duration >= Duration::zero());
            if result.checkpoint.kind.is_timed() {
                expected_total += duration;
            }
        }
        assert_eq!(result.total_timed, expected_total);
    }
    assert!(results.windows(2).all(|w| w[0].total_timed <= w[1].total_timed));
    assert_eq!(results.last().and_then(|r| r.duration), None);
}

#[test]
fn rerun_produces_identical_output() {
    let first = SegmentResult::to_json(&get_roubaix_results())
        .unwrap_or_else(|e| panic!("Failed to serialize results. Reason: {e}"));
    let second = SegmentResult::to_json(&get_roubaix_results())
        .unwrap_or_else(|e| panic!("Failed to serialize results. Reason: {e}"));
    assert_eq!(first, second);
}

#[test_log::test]
fn wrong_route_is_rejected_before_matching() {
    let mut route = get_route();
    route.checkpoints.push(Checkpoint::new(
        "Oschersleben",
        Position::new(52.0270889, 11.2803483),
        CheckpointKind::End,
    ));
    let err = rally_results(
        &CheckpointMatcher::new(MatchConfig::default()),
        &get_roubaix_activity(),
        &route.checkpoints,
    )
    .expect_err("a checkpoint of another route must fail");
    assert!(matches!(
        err,
        RallyError::Match(MatchError::OutOfBounds { index: 4, .. })
    ));
}

#[test_log::test]
fn unvisited_checkpoint_is_reported_by_name() {
    let mut route = get_route();
    route.checkpoints.insert(
        1,
        Checkpoint::new(
            "Detour",
            Position::new(40.1213, -105.2560),
            CheckpointKind::Transport,
        ),
    );
    let err = rally_results(
        &CheckpointMatcher::default(),
        &get_roubaix_activity(),
        &route.checkpoints,
    )
    .expect_err("an unvisited checkpoint must fail");
    let RallyError::Match(MatchError::Unreachable { index, name, .. }) = err else {
        panic!("Unexpected error: {err}");
    };
    assert_eq!(index, 1);
    assert_eq!(name, "Detour");
}
