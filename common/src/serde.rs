// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Serde helpers for the duration fields of the result records.
//!
//! Durations are written as `HH:MM:SS.mmm` strings. The hour field is not
//! limited to 24, so a multi-day event total stays readable.

pub mod duration;
pub mod duration_map;
pub mod option_duration;
