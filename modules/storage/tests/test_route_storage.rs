// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use chrono::Duration;
use common::{
    result::SegmentResult,
    test_helper::{
        activity::start_time,
        route::{get_route, get_route_as_json},
    },
};
use std::{collections::BTreeMap, io::ErrorKind};
use storage::FileSystemStorage;

mod helper;
use helper::setup_empty_test_folder;

#[tokio::test]
#[test_log::test]
pub async fn load_stored_route_ids() {
    let root = setup_empty_test_folder("load_stored_route_ids");
    let storage = FileSystemStorage::new(&root);
    std::fs::write(root.join("route/roubaix.route"), get_route_as_json())
        .unwrap_or_else(|e| panic!("Failed to write route. Error: {e}"));
    std::fs::write(root.join("route/boulder.route"), get_route_as_json())
        .unwrap_or_else(|e| panic!("Failed to write route. Error: {e}"));
    std::fs::write(root.join("route/notes.txt"), "not a route")
        .unwrap_or_else(|e| panic!("Failed to write notes. Error: {e}"));

    let ids = storage
        .route_ids()
        .await
        .unwrap_or_else(|e| panic!("Failed to load route ids. Error: {e}"));
    assert_eq!(ids, vec!["boulder".to_string(), "roubaix".to_string()]);
}

#[tokio::test]
pub async fn load_route_by_id() {
    let root = setup_empty_test_folder("load_route_by_id");
    let storage = FileSystemStorage::new(&root);
    std::fs::write(root.join("route/roubaix.route"), get_route_as_json())
        .unwrap_or_else(|e| panic!("Failed to write route. Error: {e}"));

    let route = storage
        .load_route("roubaix")
        .await
        .unwrap_or_else(|e| panic!("Failed to load route. Error: {e}"));
    assert_eq!(route, get_route());
}

#[tokio::test]
pub async fn load_missing_route() {
    let root = setup_empty_test_folder("load_missing_route");
    let storage = FileSystemStorage::new(&root);
    let err = storage
        .load_route("nowhere")
        .await
        .expect_err("loading a missing route must fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
pub async fn load_invalid_route() {
    let root = setup_empty_test_folder("load_invalid_route");
    let storage = FileSystemStorage::new(&root);
    std::fs::write(root.join("route/broken.route"), "{ \"name\": 1 }")
        .unwrap_or_else(|e| panic!("Failed to write route. Error: {e}"));
    let err = storage
        .load_route("broken")
        .await
        .expect_err("loading an invalid route must fail");
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[tokio::test]
pub async fn save_and_load_route() {
    let root = setup_empty_test_folder("save_and_load_route");
    let storage = FileSystemStorage::new(&root);
    storage
        .save_route("roubaix", &get_route())
        .await
        .unwrap_or_else(|e| panic!("Failed to save route. Error: {e}"));
    let route = storage
        .load_route("roubaix")
        .await
        .unwrap_or_else(|e| panic!("Failed to load route. Error: {e}"));
    assert_eq!(route, get_route());
}

#[tokio::test]
pub async fn save_and_load_results() {
    let root = setup_empty_test_folder("save_and_load_results");
    let storage = FileSystemStorage::new(&root);
    let route = get_route();
    let results = vec![
        SegmentResult {
            checkpoint: route.checkpoints[2].clone(),
            duration: Some(Duration::seconds(3012)),
            arrival_time: start_time(),
            total_timed: Duration::seconds(3012),
            category_totals: BTreeMap::from([("gravel".to_string(), Duration::seconds(3012))]),
        },
        SegmentResult {
            checkpoint: route.checkpoints[3].clone(),
            duration: None,
            arrival_time: start_time() + Duration::seconds(3012),
            total_timed: Duration::seconds(3012),
            category_totals: BTreeMap::from([("gravel".to_string(), Duration::seconds(3012))]),
        },
    ];

    let path = storage
        .save_results("roubaix_dan_b", &results)
        .await
        .unwrap_or_else(|e| panic!("Failed to save results. Error: {e}"));
    assert_eq!(path, root.join("result/roubaix_dan_b.result"));
    let loaded = storage
        .load_results("roubaix_dan_b")
        .await
        .unwrap_or_else(|e| panic!("Failed to load results. Error: {e}"));
    assert_eq!(loaded, results);
}
