// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Fixtures shared by the tests of all workspace crates.

pub mod activity;
pub mod route;
