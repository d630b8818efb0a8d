// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Storage Modul for the rally timing
//!
//! Provides the file system storage for routes and results and the reader
//! for recorded activities.

pub mod activity_csv;

use activity_csv::{ReadError, read_activity};
use common::{activity::Activity, result::SegmentResult, route::Route};
use std::{
    fs::DirBuilder,
    io,
    path::{Path, PathBuf},
};
use tokio::{
    fs::read_dir,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, error, info};

/// A file system–based storage of routes and results.
///
/// Each route is stored as a separate JSON file with the `.route` extension in the folder route.
/// Each result list is stored as a separate JSON file with the `.result` extension in the folder result.
///
/// ## Important
///
/// `FileSystemStorage` **does not implement any internal synchronization or locking mechanisms**.
/// Therefore, **only one instance should be used per `root_dir` in the application at any time**.
pub struct FileSystemStorage {
    route_root_dir: PathBuf,
    result_root_dir: PathBuf,
}

impl FileSystemStorage {
    pub fn new(root_dir: &Path) -> Self {
        let route_root_dir = root_dir.join("route");
        let result_root_dir = root_dir.join("result");
        for dir in [&route_root_dir, &result_root_dir] {
            if let Err(e) = DirBuilder::new().recursive(true).create(dir) {
                error!(
                    "Failed to create storage folder {}. Error: {}",
                    dir.to_string_lossy(),
                    e
                );
            }
        }
        info!(
            "Using route storage folder: {}",
            route_root_dir.to_string_lossy()
        );
        info!(
            "Using result storage folder: {}",
            result_root_dir.to_string_lossy()
        );
        FileSystemStorage {
            route_root_dir,
            result_root_dir,
        }
    }

    /// Returns the ids of all stored routes, sorted ascending.
    ///
    /// Errors:
    /// - Propagates I/O errors from reading the route folder.
    pub async fn route_ids(&self) -> io::Result<Vec<String>> {
        self.ids(&self.route_root_dir, "route").await
    }

    /// Loads and parses the route stored under `id`.
    ///
    /// Errors:
    /// - `io::ErrorKind::NotFound` if no route with that id exists.
    /// - JSON errors are converted into `io::ErrorKind::InvalidData`.
    pub async fn load_route(&self, id: &str) -> io::Result<Route> {
        let file_path = file_path(&self.route_root_dir, id, "route");
        let json = load_file(&file_path).await?;
        let route = Route::from_json(&json)?;
        debug!(
            "Loaded route \"{}\" from {}",
            route.name,
            file_path.to_string_lossy()
        );
        Ok(route)
    }

    pub async fn save_route(&self, id: &str, route: &Route) -> io::Result<()> {
        let file_path = file_path(&self.route_root_dir, id, "route");
        save_bytes(&file_path, route.to_json()?.as_bytes()).await
    }

    /// Persists `results` under `id`, replacing earlier results with the same id.
    ///
    /// Returns the path of the written file.
    pub async fn save_results(&self, id: &str, results: &[SegmentResult]) -> io::Result<PathBuf> {
        let file_path = file_path(&self.result_root_dir, id, "result");
        let json = SegmentResult::to_json(results)?;
        save_bytes(&file_path, json.as_bytes()).await?;
        debug!("Stored results with id {} in {}", id, file_path.to_string_lossy());
        Ok(file_path)
    }

    pub async fn load_results(&self, id: &str) -> io::Result<Vec<SegmentResult>> {
        let json = load_file(&file_path(&self.result_root_dir, id, "result")).await?;
        Ok(SegmentResult::from_json(&json)?)
    }

    /// Reads an activity from the CSV file at `path`.
    pub async fn load_activity(path: &Path) -> Result<Activity, ReadError> {
        let data = tokio::fs::read(path).await?;
        let activity = read_activity(data.as_slice())?;
        debug!(
            "Loaded activity with {} samples from {}",
            activity.len(),
            path.to_string_lossy()
        );
        Ok(activity)
    }

    async fn ids(&self, dir: &Path, extension: &str) -> io::Result<Vec<String>> {
        let mut dirs = read_dir(dir).await?;
        let mut result = vec![];
        while let Some(entry) = dirs.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.file_type().is_file() {
                continue;
            }
            if let Some(ext) = entry.path().extension()
                && ext == extension
                && let Some(id) = entry.path().file_stem()
            {
                debug!(
                    "Found file with id {} in folder {}",
                    id.to_string_lossy(),
                    dir.to_string_lossy()
                );
                result.push(id.to_string_lossy().to_string());
            }
        }
        result.sort();
        Ok(result)
    }
}

/// Writes arbitrary bytes to the file at `path`, ensuring they are persisted.
///
/// The file is created if it does not exist, or truncated if it does. After writing
/// `data`, the file is explicitly synced to ensure durability.
async fn save_bytes(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    Ok(())
}

async fn load_file(path: &Path) -> io::Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut json = String::default();
    file.read_to_string(&mut json).await?;
    Ok(json)
}

fn file_path(dir: &Path, id: &str, extension: &str) -> PathBuf {
    let mut file_path = dir.join(id);
    file_path.set_extension(extension);
    file_path
}
