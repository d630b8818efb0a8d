// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded track point.
///
/// Samples are produced by the track readers and are never modified once
/// they are part of an [`Activity`](crate::activity::Activity).
///
/// # Fields
///
/// - `timestamp` – UTC time of the fix.
/// - `latitude` – Latitude in decimal degrees.
/// - `longitude` – Longitude in decimal degrees.
/// - `altitude` – Optional altitude in metres, carried through but unused by matching.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, latitude: f64, longitude: f64) -> Self {
        Sample {
            timestamp,
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Returns the planar position of this sample.
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}
