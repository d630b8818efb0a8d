// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    checkpoint::{Checkpoint, CheckpointKind},
    position::Position,
    route::Route,
};

pub const START_FINISH: Position = Position {
    latitude: 40.117348,
    longitude: -105.258836,
};

pub const REFUEL: Position = Position {
    latitude: 40.116263,
    longitude: -105.257817,
};

pub fn get_route_as_json<'a>() -> &'a str {
    r#"
    {
        "name": "Roubaix",
        "checkpoints": [
            {
                "name": "Ride Start: lap 1",
                "location": { "latitude": 40.117348, "longitude": -105.258836 },
                "kind": "transport",
                "kind_args": { "time_limit": 5400 }
            },
            {
                "name": "End lap 1, Refuel, ride to start",
                "location": { "latitude": 40.116263, "longitude": -105.257817 },
                "kind": "transport"
            },
            {
                "name": "Race: Lap two",
                "location": { "latitude": 40.117348, "longitude": -105.258836 },
                "kind": "timed",
                "categories": ["gravel"]
            },
            {
                "name": "Finish",
                "location": { "latitude": 40.116263, "longitude": -105.257817 },
                "type": "end"
            }
        ]
    }
    "#
}

/// Two laps between a start/finish point and a refuel point. Only the second
/// lap is timed.
pub fn get_route() -> Route {
    Route {
        name: "Roubaix".to_string(),
        checkpoints: vec![
            Checkpoint::new("Ride Start: lap 1", START_FINISH, CheckpointKind::Transport)
                .with_time_limit(5400),
            Checkpoint::new(
                "End lap 1, Refuel, ride to start",
                REFUEL,
                CheckpointKind::Transport,
            ),
            Checkpoint::new("Race: Lap two", START_FINISH, CheckpointKind::Timed)
                .with_category("gravel"),
            Checkpoint::new("Finish", REFUEL, CheckpointKind::End),
        ],
    }
}
