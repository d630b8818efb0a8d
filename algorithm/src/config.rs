// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use serde::{Deserialize, Serialize};

/// Thresholds of the checkpoint matcher.
///
/// All values are expressed in the unit of the [`LocalMetric`](crate::metric::LocalMetric)
/// the matcher runs with. The defaults are meant for the
/// [`PlanarMetric`](crate::metric::PlanarMetric), i.e. raw degrees.
///
/// # Fields
///
/// - `near` – A sample closer than this to a checkpoint may be selected as arrival.
/// - `existence_factor` – A checkpoint whose closest sample is farther away than
///   `near * existence_factor` counts as never approached.
/// - `epsilon` – Tolerance added to the squared distances of the angle test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub near: f64,
    pub existence_factor: f64,
    pub epsilon: f64,
}

impl MatchConfig {
    pub const DEFAULT_NEAR: f64 = 2e-4;
    pub const DEFAULT_EXISTENCE_FACTOR: f64 = 10.0;
    pub const DEFAULT_EPSILON: f64 = 1e-5;

    /// Distance below which a checkpoint is considered approached at all.
    pub fn existence_threshold(&self) -> f64 {
        self.near * self.existence_factor
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            near: Self::DEFAULT_NEAR,
            existence_factor: Self::DEFAULT_EXISTENCE_FACTOR,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}
