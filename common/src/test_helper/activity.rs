// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    activity::Activity,
    position::Position,
    sample::Sample,
    test_helper::route::{REFUEL, START_FINISH},
};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 4, 5, 14, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("Invalid start time"))
}

fn sample(seconds: i64, latitude: f64, longitude: f64) -> Sample {
    Sample::new(start_time() + Duration::seconds(seconds), latitude, longitude)
}

/// Samples of a ride over the [`get_route`](crate::test_helper::route::get_route) route.
///
/// The rider arrives at the start at 0:00:00, at the refuel point at 1:02:02,
/// back at the start at 1:02:35 and at the finish at 1:52:47. In between the
/// track loops far to the north of both checkpoints.
pub fn get_roubaix_samples() -> Vec<Sample> {
    vec![
        sample(0, START_FINISH.latitude, START_FINISH.longitude),
        sample(600, 40.1273, -105.2588),
        sample(2400, 40.1273, -105.2478),
        sample(3600, 40.1213, -105.2478),
        sample(3722, REFUEL.latitude, REFUEL.longitude),
        sample(3755, START_FINISH.latitude, START_FINISH.longitude),
        sample(4500, 40.1273, -105.2588),
        sample(5700, 40.1273, -105.2478),
        sample(6600, 40.1213, -105.2478),
        sample(6767, REFUEL.latitude, REFUEL.longitude),
        sample(6900, 40.1150, -105.2560),
    ]
}

pub fn get_roubaix_activity() -> Activity {
    Activity::new(get_roubaix_samples())
        .unwrap_or_else(|e| panic!("Failed to build the roubaix activity. Reason: {e}"))
}

/// Samples along a straight line from `from` to `to`, one per second.
///
/// `steps` legs produce `steps + 1` samples, the first one at `from` and the
/// last one at `to`.
pub fn get_line_samples(from: Position, to: Position, steps: usize) -> Vec<Sample> {
    (0..=steps)
        .map(|step| {
            let fraction = step as f64 / steps as f64;
            sample(
                step as i64,
                from.latitude + (to.latitude - from.latitude) * fraction,
                from.longitude + (to.longitude - from.longitude) * fraction,
            )
        })
        .collect()
}
