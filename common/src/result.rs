// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::checkpoint::Checkpoint;
use crate::serde::{duration, duration_map, option_duration};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The timing result of one checkpoint and of the segment that starts at it.
///
/// Serialized, the checkpoint fields appear at the top level next to the
/// computed fields.
///
/// # Fields
///
/// - `checkpoint` – Copy of the checkpoint definition.
/// - `duration` – Time until the arrival at the next checkpoint, `None` for the last one.
/// - `arrival_time` – Timestamp of the sample matched as arrival at this checkpoint.
/// - `total_timed` – Sum of all timed segment durations up to and including this segment.
/// - `category_totals` – The same running sum, split per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    #[serde(flatten)]
    pub checkpoint: Checkpoint,
    #[serde(with = "option_duration")]
    pub duration: Option<Duration>,
    pub arrival_time: DateTime<Utc>,
    #[serde(with = "duration")]
    pub total_timed: Duration,
    #[serde(default, with = "duration_map")]
    pub category_totals: BTreeMap<String, Duration>,
}

impl SegmentResult {
    pub fn from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    /// Serializes a list of results into a JSON array.
    pub fn to_json(results: &[SegmentResult]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(results)
    }
}
