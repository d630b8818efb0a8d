// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Checkpoint matching and result accumulation for rally style events.
//!
//! The entry point is [`rally_results`], which runs the
//! [`CheckpointMatcher`](matcher::CheckpointMatcher) over an activity and
//! feeds the arrivals into [`accumulate`](accumulator::accumulate).

pub mod accumulator;
pub mod config;
pub mod error;
pub mod matcher;
pub mod metric;

use crate::error::RallyError;
use crate::matcher::CheckpointMatcher;
use crate::metric::LocalMetric;
use common::{activity::Activity, checkpoint::Checkpoint, result::SegmentResult};

/// Matches `checkpoints` against `activity` and computes the per segment results.
///
/// The route is either matched completely or not at all: the first failing
/// checkpoint aborts the whole pass.
pub fn rally_results<M: LocalMetric>(
    matcher: &CheckpointMatcher<M>,
    activity: &Activity,
    checkpoints: &[Checkpoint],
) -> Result<Vec<SegmentResult>, RallyError> {
    let matches = matcher.match_checkpoints(activity, checkpoints)?;
    let results = accumulator::accumulate(checkpoints, &matches)?;
    Ok(results)
}

#[cfg(test)]
mod tests;
