// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Position;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The role a checkpoint plays for the segment that starts at it.
///
/// Kinds are written in snake case (`"timed"`, `"transport"`, `"end"`).
/// Any other name is kept as [`CheckpointKind::Other`] so that routes using
/// newer kinds still load and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointKind {
    /// The following segment is scored by its elapsed time.
    Timed,
    /// The following segment is ridden but not scored.
    Transport,
    /// The last checkpoint of the route.
    End,
    #[serde(untagged)]
    Other(String),
}

impl CheckpointKind {
    pub fn is_timed(&self) -> bool {
        *self == CheckpointKind::Timed
    }
}

impl fmt::Display for CheckpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointKind::Timed => f.write_str("timed"),
            CheckpointKind::Transport => f.write_str("transport"),
            CheckpointKind::End => f.write_str("end"),
            CheckpointKind::Other(name) => f.write_str(name),
        }
    }
}

/// Kind specific parameters of a checkpoint.
///
/// Only `time_limit` has a meaning today. Every other key is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KindArgs {
    /// Time limit in seconds for the following segment (transport stages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One element of a route, supplied in visit order.
///
/// # Fields
///
/// - `name` – Display label of the checkpoint.
/// - `location` – The position that has to be reached.
/// - `kind` – How the segment starting at this checkpoint is scored.
/// - `kind_args` – Optional kind specific parameters.
/// - `categories` – Categories (e.g. `"uphill"`, `"gravel"`) the following segment counts
///   towards when it is timed.
///
/// # Example
///
/// ```rust
/// use common::checkpoint::{Checkpoint, CheckpointKind};
/// use common::position::Position;
///
/// let start = Checkpoint::new(
///     "Race: Lap two",
///     Position::new(40.117348, -105.258836),
///     CheckpointKind::Timed,
/// );
/// assert!(start.kind.is_timed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub name: String,
    pub location: Position,
    #[serde(alias = "type")]
    pub kind: CheckpointKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_args: Option<KindArgs>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
}

impl Checkpoint {
    pub fn new(name: &str, location: Position, kind: CheckpointKind) -> Self {
        Checkpoint {
            name: name.to_string(),
            location,
            kind,
            kind_args: None,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_time_limit(mut self, seconds: u64) -> Self {
        self.kind_args.get_or_insert_with(KindArgs::default).time_limit = Some(seconds);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.insert(category.to_string());
        self
    }

    /// Returns the configured time limit of the following segment.
    pub fn time_limit(&self) -> Option<Duration> {
        self.kind_args
            .as_ref()
            .and_then(|args| args.time_limit)
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(Duration::try_seconds)
    }
}
