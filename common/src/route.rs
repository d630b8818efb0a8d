// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::checkpoint::Checkpoint;
use serde::{Deserialize, Serialize};

/// A rally route: a name and the checkpoints in the order they must be visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub checkpoints: Vec<Checkpoint>,
}

impl Route {
    /// Creates a `Route` instance by deserializing it from a JSON string.
    ///
    /// # Returns
    ///
    /// * `Ok(Route)` – If the JSON string was successfully parsed.
    /// * `Err(serde_json::Error)` – If parsing failed due to invalid format or type mismatch.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
