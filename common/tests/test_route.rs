// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::{
    route::Route,
    test_helper::route::{get_route, get_route_as_json},
};

#[test]
pub fn deserialize_route_from_json() {
    let route = Route::from_json(get_route_as_json())
        .unwrap_or_else(|e| panic!("Failed to deserialize the raw json. Reason: {e}"));
    assert_eq!(route, get_route());
}

#[test]
pub fn serialized_route_loads_again() {
    let json = get_route()
        .to_json()
        .unwrap_or_else(|e| panic!("Failed to serialize the route. Reason: {e}"));
    assert!(json.contains("\"kind\": \"timed\""));
    let route = Route::from_json(&json)
        .unwrap_or_else(|e| panic!("Failed to deserialize the route. Reason: {e}"));
    assert_eq!(route, get_route());
}
