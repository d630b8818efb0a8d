// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a geographical coordinate with latitude and longitude.
///
/// The `Position` struct is used for checkpoint locations and for the
/// coordinates of recorded samples, in decimal degrees. Latitude values
/// range from -90.0 to 90.0, and longitude values range from -180.0 to 180.0.
///
/// # Example
///
/// ```rust
/// use common::position::Position;
///
/// let pos = Position {
///     latitude: 40.117348,
///     longitude: -105.258836,
/// };
///
/// println!("{pos}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Creates a new [`Position`] with the given latitude and longitude.
    ///
    /// # Example
    ///
    /// ```rust
    /// use common::position::Position;
    ///
    /// let pos = Position::new(40.117348, -105.258836);
    /// assert_eq!(pos.latitude, 40.117348);
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Axis-aligned bounding box over a set of positions.
///
/// The bounds are inclusive: a position lying exactly on an edge is contained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub min: Position,
    pub max: Position,
}

impl Envelope {
    /// Creates an envelope covering a single position.
    pub fn new(pos: Position) -> Self {
        Envelope { min: pos, max: pos }
    }

    /// Grows the envelope so that it also covers `pos`.
    pub fn extend(&mut self, pos: &Position) {
        self.min.latitude = self.min.latitude.min(pos.latitude);
        self.min.longitude = self.min.longitude.min(pos.longitude);
        self.max.latitude = self.max.latitude.max(pos.latitude);
        self.max.longitude = self.max.longitude.max(pos.longitude);
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.latitude >= self.min.latitude
            && pos.latitude <= self.max.latitude
            && pos.longitude >= self.min.longitude
            && pos.longitude <= self.max.longitude
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
