// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::position::{Envelope, Position};
use thiserror::Error;

/// Failures of the checkpoint matching pass.
///
/// Every checkpoint related variant names the checkpoint by index and name
/// and carries its location.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("route contains no checkpoints")]
    EmptyRoute,
    #[error(
        "checkpoint {index} '{name}' at {location} lies outside the activity envelope {envelope}"
    )]
    OutOfBounds {
        index: usize,
        name: String,
        location: Position,
        envelope: Envelope,
    },
    #[error(
        "checkpoint {index} '{name}' at {location} was never approached, closest sample is {closest} away"
    )]
    Unreachable {
        index: usize,
        name: String,
        location: Position,
        closest: f64,
    },
    #[error(
        "checkpoint {index} '{name}' at {location} was approached to {closest} but no sample qualifies as arrival"
    )]
    NoCandidate {
        index: usize,
        name: String,
        location: Position,
        closest: f64,
    },
}

/// Failures of the result accumulation pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccumulateError {
    #[error("checkpoint {index} '{name}' has no matched arrival")]
    MissingArrival { index: usize, name: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RallyError {
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Accumulate(#[from] AccumulateError),
}
