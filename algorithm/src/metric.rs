// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::position::Position;

/// Distance between two positions that lie close to each other.
///
/// The matcher only ever compares distances against its thresholds, so an
/// implementation is free to pick its unit as long as the
/// [`MatchConfig`](crate::config::MatchConfig) uses the same one.
pub trait LocalMetric {
    fn distance(&self, pos1: &Position, pos2: &Position) -> f64;
}

/// Euclidean distance on raw latitude/longitude differences, in degrees.
///
/// Treats the coordinates as a flat (x, y) plane. This is only meaningful
/// while the compared points are close to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarMetric;

impl LocalMetric for PlanarMetric {
    fn distance(&self, pos1: &Position, pos2: &Position) -> f64 {
        (pos1.latitude - pos2.latitude).hypot(pos1.longitude - pos2.longitude)
    }
}

/// Approximate distance in meters between two geographic positions.
///
/// Uses a simplified equirectangular approximation: the earth is assumed to be
/// locally flat and the longitude difference is scaled by the cosine of the
/// mean latitude.
///
/// # Notes
/// - Accuracy decreases over long distances or near the poles.
/// - Thresholds used together with this metric have to be given in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EquirectangularMetric;

impl EquirectangularMetric {
    const METERS_PER_DEGREE: f64 = 111_300.0;
}

impl LocalMetric for EquirectangularMetric {
    fn distance(&self, pos1: &Position, pos2: &Position) -> f64 {
        let lat = ((pos1.latitude + pos2.latitude) / 2.0).to_radians();
        let dx = Self::METERS_PER_DEGREE * lat.cos() * (pos1.longitude - pos2.longitude);
        let dy = Self::METERS_PER_DEGREE * (pos1.latitude - pos2.latitude);
        dx.hypot(dy)
    }
}
