// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    position::{Envelope, Position},
    sample::Sample,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised when a sample sequence does not describe a usable track.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActivityError {
    #[error("activity contains no samples")]
    Empty,
    #[error("sample {index} at {timestamp} is earlier than its predecessor at {previous}")]
    NotChronological {
        index: usize,
        timestamp: DateTime<Utc>,
        previous: DateTime<Utc>,
    },
    #[error("sample {index} has a non-finite position {position}")]
    InvalidPosition { index: usize, position: Position },
}

/// A recorded activity: the ordered, validated sequence of track samples.
///
/// Construction guarantees that the activity holds at least one sample,
/// that all coordinates are finite and that timestamps never decrease.
/// Duplicate timestamps are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    samples: Vec<Sample>,
}

impl Activity {
    /// Validates `samples` and wraps them into an [`Activity`].
    ///
    /// # Errors
    ///
    /// * [`ActivityError::Empty`] – if `samples` is empty.
    /// * [`ActivityError::InvalidPosition`] – if a latitude or longitude is NaN or infinite.
    /// * [`ActivityError::NotChronological`] – if a timestamp is earlier than the one before it.
    pub fn new(samples: Vec<Sample>) -> Result<Self, ActivityError> {
        if samples.is_empty() {
            return Err(ActivityError::Empty);
        }
        for (index, sample) in samples.iter().enumerate() {
            let position = sample.position();
            if !position.is_finite() {
                return Err(ActivityError::InvalidPosition { index, position });
            }
        }
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(ActivityError::NotChronological {
                    index: index + 1,
                    timestamp: pair[1].timestamp,
                    previous: pair[0].timestamp,
                });
            }
        }
        Ok(Activity { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`, an activity holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample following `index`.
    ///
    /// The last sample is its own successor, which gives it a zero-length leg.
    pub fn successor(&self, index: usize) -> &Sample {
        let next = (index + 1).min(self.samples.len() - 1);
        &self.samples[next]
    }

    /// Returns the bounding box of all sample positions.
    pub fn envelope(&self) -> Envelope {
        let mut envelope = Envelope::new(self.samples[0].position());
        for sample in &self.samples[1..] {
            envelope.extend(&sample.position());
        }
        envelope
    }
}
