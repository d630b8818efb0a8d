// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::error::AccumulateError;
use crate::matcher::MatchedCheckpoint;
use chrono::{DateTime, Duration, Utc};
use common::{checkpoint::Checkpoint, result::SegmentResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Running state of the result pass.
///
/// Segments are added in route order. Each added segment appends exactly one
/// record, records are never touched again afterwards.
#[derive(Debug, Default)]
pub struct ResultAccumulator {
    total_timed: Duration,
    category_totals: BTreeMap<String, Duration>,
    results: Vec<SegmentResult>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        ResultAccumulator::default()
    }

    /// Returns the sum of all timed segments added so far.
    pub fn total_timed(&self) -> Duration {
        self.total_timed
    }

    /// Adds the segment that starts at `checkpoint`.
    ///
    /// The duration of the segment is counted towards the totals only if the
    /// checkpoint is timed.
    pub fn add_segment(
        &mut self,
        checkpoint: &Checkpoint,
        arrival: DateTime<Utc>,
        next_arrival: DateTime<Utc>,
    ) {
        let duration = next_arrival - arrival;
        if checkpoint.kind.is_timed() {
            self.total_timed += duration;
            for category in &checkpoint.categories {
                *self
                    .category_totals
                    .entry(category.clone())
                    .or_insert_with(Duration::zero) += duration;
            }
        }
        self.push(checkpoint, Some(duration), arrival);
    }

    /// Adds the final checkpoint and returns all records.
    pub fn finish(mut self, checkpoint: &Checkpoint, arrival: DateTime<Utc>) -> Vec<SegmentResult> {
        self.push(checkpoint, None, arrival);
        self.results
    }

    fn push(&mut self, checkpoint: &Checkpoint, duration: Option<Duration>, arrival: DateTime<Utc>) {
        self.results.push(SegmentResult {
            checkpoint: checkpoint.clone(),
            duration,
            arrival_time: arrival,
            total_timed: self.total_timed,
            category_totals: self.category_totals.clone(),
        });
    }
}

fn arrival(
    checkpoints: &[Checkpoint],
    matches: &[MatchedCheckpoint],
    index: usize,
) -> Result<DateTime<Utc>, AccumulateError> {
    matches
        .iter()
        .find(|m| m.checkpoint_index == index)
        .map(|m| m.arrival)
        .ok_or_else(|| AccumulateError::MissingArrival {
            index,
            name: checkpoints[index].name.clone(),
        })
}

/// Converts the matched arrivals into one result record per checkpoint.
///
/// Records are returned in route order. The last record has no duration and
/// carries the grand totals.
///
/// # Errors
/// [`AccumulateError::MissingArrival`] if any checkpoint has no match.
pub fn accumulate(
    checkpoints: &[Checkpoint],
    matches: &[MatchedCheckpoint],
) -> Result<Vec<SegmentResult>, AccumulateError> {
    let Some((last, segments)) = checkpoints.split_last() else {
        return Ok(vec![]);
    };

    let mut accumulator = ResultAccumulator::new();
    let mut current = arrival(checkpoints, matches, 0)?;
    for (index, checkpoint) in segments.iter().enumerate() {
        let next = arrival(checkpoints, matches, index + 1)?;
        accumulator.add_segment(checkpoint, current, next);
        current = next;
    }
    debug!(
        "Accumulated {} checkpoints, timed total {}",
        checkpoints.len(),
        accumulator.total_timed()
    );
    Ok(accumulator.finish(last, current))
}
