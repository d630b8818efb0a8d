// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::metric::{LocalMetric, PlanarMetric};
use chrono::{DateTime, Utc};
use common::{activity::Activity, checkpoint::Checkpoint, position::Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The sample identified as the arrival at a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedCheckpoint {
    /// Index of the checkpoint in the route.
    pub checkpoint_index: usize,
    /// Index of the arrival sample in the activity.
    pub sample_index: usize,
    /// Timestamp of the arrival sample.
    pub arrival: DateTime<Utc>,
}

/// Distances evaluated for one sample while looking for a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ScanRow {
    to_checkpoint: f64,
    next_to_checkpoint: f64,
    leg: f64,
}

impl ScanRow {
    /// Law of cosines test on the triangle sample, successor, checkpoint.
    ///
    /// Holds when the angle at the sample between the direction to the
    /// checkpoint and the direction to the successor is at least 90°, i.e. the
    /// checkpoint is no longer ahead on the current leg. `epsilon` widens the test.
    fn is_acute(&self, epsilon: f64) -> bool {
        self.to_checkpoint.powi(2) + self.leg.powi(2)
            <= self.next_to_checkpoint.powi(2) + epsilon
    }
}

/// Finds the arrival sample of every checkpoint of a route.
///
/// Checkpoints are matched strictly in route order. A scan cursor starts at
/// the first sample and moves to the arrival sample of each matched
/// checkpoint, so later checkpoints can never match earlier samples. Two
/// consecutive checkpoints may share the same arrival sample.
///
/// # Type Parameters
/// - `M`: The [`LocalMetric`] used for all distances. Defaults to [`PlanarMetric`].
#[derive(Debug, Clone)]
pub struct CheckpointMatcher<M: LocalMetric = PlanarMetric> {
    config: MatchConfig,
    metric: M,
}

impl CheckpointMatcher<PlanarMetric> {
    /// Creates a matcher working on raw latitude/longitude differences.
    pub fn new(config: MatchConfig) -> Self {
        CheckpointMatcher::with_metric(config, PlanarMetric)
    }
}

impl Default for CheckpointMatcher<PlanarMetric> {
    fn default() -> Self {
        CheckpointMatcher::new(MatchConfig::default())
    }
}

impl<M: LocalMetric> CheckpointMatcher<M> {
    /// Creates a matcher with a custom metric. The thresholds of `config`
    /// have to be given in the unit of `metric`.
    pub fn with_metric(config: MatchConfig, metric: M) -> Self {
        CheckpointMatcher { config, metric }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Verifies that every checkpoint lies inside the bounding box of the activity.
    ///
    /// A checkpoint outside of it usually means the activity was recorded on a
    /// different route.
    ///
    /// # Errors
    /// [`MatchError::OutOfBounds`] for the first checkpoint outside the envelope.
    pub fn check_bounds(
        &self,
        activity: &Activity,
        checkpoints: &[Checkpoint],
    ) -> Result<(), MatchError> {
        let envelope = activity.envelope();
        match checkpoints
            .iter()
            .enumerate()
            .find(|(_, checkpoint)| !envelope.contains(&checkpoint.location))
        {
            Some((index, checkpoint)) => Err(MatchError::OutOfBounds {
                index,
                name: checkpoint.name.clone(),
                location: checkpoint.location,
                envelope,
            }),
            None => Ok(()),
        }
    }

    /// Identifies the arrival sample of each checkpoint.
    ///
    /// Returns one [`MatchedCheckpoint`] per checkpoint, in route order. The
    /// sample indices never decrease.
    ///
    /// # Errors
    /// - [`MatchError::EmptyRoute`] if `checkpoints` is empty.
    /// - [`MatchError::OutOfBounds`] if the bounds check fails.
    /// - [`MatchError::Unreachable`] or [`MatchError::NoCandidate`] for the first
    ///   checkpoint that cannot be matched. No partial result is returned.
    pub fn match_checkpoints(
        &self,
        activity: &Activity,
        checkpoints: &[Checkpoint],
    ) -> Result<Vec<MatchedCheckpoint>, MatchError> {
        if checkpoints.is_empty() {
            return Err(MatchError::EmptyRoute);
        }
        self.check_bounds(activity, checkpoints)?;

        let legs = self.leg_lengths(activity);
        let mut row_slice = 0;
        let mut matches = Vec::with_capacity(checkpoints.len());
        for (index, checkpoint) in checkpoints.iter().enumerate() {
            let matched = self
                .match_checkpoint(activity, &legs, row_slice, index, checkpoint)
                .inspect_err(|e| warn!("Matching stopped: {e}"))?;
            debug!(
                "Checkpoint {} '{}' reached at sample {} ({})",
                index, checkpoint.name, matched.sample_index, matched.arrival
            );
            row_slice = matched.sample_index;
            matches.push(matched);
        }
        Ok(matches)
    }

    /// Distance from every sample to its successor. The last sample has a
    /// zero-length leg.
    fn leg_lengths(&self, activity: &Activity) -> Vec<f64> {
        activity
            .samples()
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                self.metric
                    .distance(&sample.position(), &activity.successor(index).position())
            })
            .collect()
    }

    fn scan_row(
        &self,
        activity: &Activity,
        legs: &[f64],
        index: usize,
        location: &Position,
    ) -> ScanRow {
        let sample = &activity.samples()[index];
        ScanRow {
            to_checkpoint: self.metric.distance(&sample.position(), location),
            next_to_checkpoint: self
                .metric
                .distance(&activity.successor(index).position(), location),
            leg: legs[index],
        }
    }

    /// Scans the samples from `row_slice` on for the first arrival at `checkpoint`.
    ///
    /// The checkpoint has to be approached closer than the existence threshold
    /// somewhere in the scanned range before any sample is considered. A sample
    /// then qualifies when it is within `near` of the checkpoint and passes the
    /// angle test of [`ScanRow::is_acute`].
    fn match_checkpoint(
        &self,
        activity: &Activity,
        legs: &[f64],
        row_slice: usize,
        index: usize,
        checkpoint: &Checkpoint,
    ) -> Result<MatchedCheckpoint, MatchError> {
        let rows: Vec<ScanRow> = (row_slice..activity.len())
            .map(|sample_index| self.scan_row(activity, legs, sample_index, &checkpoint.location))
            .collect();
        let closest = rows
            .iter()
            .map(|row| row.to_checkpoint)
            .fold(f64::INFINITY, f64::min);

        if closest > self.config.existence_threshold() {
            return Err(MatchError::Unreachable {
                index,
                name: checkpoint.name.clone(),
                location: checkpoint.location,
                closest,
            });
        }

        match rows
            .iter()
            .position(|row| row.to_checkpoint <= self.config.near && row.is_acute(self.config.epsilon))
        {
            Some(offset) => {
                let sample_index = row_slice + offset;
                Ok(MatchedCheckpoint {
                    checkpoint_index: index,
                    sample_index,
                    arrival: activity.samples()[sample_index].timestamp,
                })
            }
            None => Err(MatchError::NoCandidate {
                index,
                name: checkpoint.name.clone(),
                location: checkpoint.location,
                closest,
            }),
        }
    }
}

/// Labels every sample with the segment it belongs to.
///
/// A sample belongs to segment `i` if checkpoint `i` is the last checkpoint
/// reached at or before it. Samples before the first arrival and samples from
/// the arrival at the final checkpoint on belong to no segment. When two
/// checkpoints share an arrival sample the later one wins.
pub fn assign_segments(matches: &[MatchedCheckpoint], sample_count: usize) -> Vec<Option<usize>> {
    let mut segments = vec![None; sample_count];
    let mut matches = matches.to_vec();
    matches.sort_by_key(|m| m.checkpoint_index);
    let Some(last) = matches.last().map(|m| m.checkpoint_index) else {
        return segments;
    };

    for (pos, matched) in matches.iter().enumerate() {
        if matched.checkpoint_index == last {
            break;
        }
        let end = matches
            .get(pos + 1)
            .map_or(sample_count, |next| next.sample_index)
            .min(sample_count);
        let start = matched.sample_index.min(end);
        segments[start..end].fill(Some(matched.checkpoint_index));
    }
    segments
}
