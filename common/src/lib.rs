// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Common Modul for the rally timing
//!
//! Provides the data types shared by the matcher, the storage and the headless binary.

pub mod activity;
pub mod checkpoint;
pub mod position;
pub mod result;
pub mod route;
pub mod sample;
pub mod serde;
pub mod test_helper;

#[cfg(test)]
mod tests;
