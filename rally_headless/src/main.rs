// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use algorithm::{config::MatchConfig, error::RallyError, matcher::CheckpointMatcher, rally_results};
use clap::{Parser, ValueEnum};
use common::{result::SegmentResult, route::Route, serde::duration::duration_to_string};
use dirs::data_local_dir;
use serde::Serialize;
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};
use storage::{FileSystemStorage, activity_csv::ReadError};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route definition, either a JSON file or the id of a stored route.
    #[arg(short, long)]
    route: String,
    /// Activity CSV files to match against the route.
    #[arg(required = true)]
    activities: Vec<PathBuf>,
    #[arg(long, default_value_t = MatchConfig::DEFAULT_NEAR)]
    near: f64,
    #[arg(long, default_value_t = MatchConfig::DEFAULT_EXISTENCE_FACTOR)]
    existence_factor: f64,
    #[arg(long, default_value_t = MatchConfig::DEFAULT_EPSILON)]
    epsilon: f64,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Store the results in the storage folder.
    #[arg(short, long)]
    save: bool,
    /// Storage folder, defaults to `rally` in the local data directory.
    #[arg(long)]
    storage_dir: Option<PathBuf>,
}

impl Cli {
    fn match_config(&self) -> MatchConfig {
        MatchConfig {
            near: self.near,
            existence_factor: self.existence_factor,
            epsilon: self.epsilon,
        }
    }
}

#[derive(Error, Debug)]
enum ActivityFailure {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Rally(#[from] RallyError),
    #[error("matching task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct Report<'a> {
    activity: String,
    route: &'a str,
    results: &'a [SegmentResult],
}

fn get_storage_dir(cli: &Cli) -> Result<PathBuf, ()> {
    if let Some(dir) = &cli.storage_dir {
        return Ok(dir.clone());
    }
    let mut storage_dir = data_local_dir().ok_or_else(|| {
        error!("Could not determine local data directory");
    })?;
    storage_dir.push("rally");
    Ok(storage_dir)
}

async fn load_route(cli: &Cli, storage: &FileSystemStorage) -> io::Result<Route> {
    let path = Path::new(&cli.route);
    if path.is_file() {
        let json = tokio::fs::read_to_string(path).await?;
        return Ok(Route::from_json(&json)?);
    }
    storage.load_route(&cli.route).await
}

/// Matches one activity on a blocking task and accumulates its results.
async fn score_activity(
    path: PathBuf,
    route: Arc<Route>,
    matcher: Arc<CheckpointMatcher>,
) -> Result<Vec<SegmentResult>, ActivityFailure> {
    let activity = FileSystemStorage::load_activity(&path).await?;
    let results =
        tokio::task::spawn_blocking(move || rally_results(&*matcher, &activity, &route.checkpoints))
            .await??;
    Ok(results)
}

fn activity_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn print_json(route: &Route, path: &Path, results: &[SegmentResult]) -> Result<(), ()> {
    let report = Report {
        activity: path.to_string_lossy().to_string(),
        route: &route.name,
        results,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| error!("Failed to serialize results. Error: {}", e))?;
    println!("{json}");
    Ok(())
}

fn write_csv<W: io::Write>(
    writer: &mut csv::Writer<W>,
    path: &Path,
    results: &[SegmentResult],
) -> csv::Result<()> {
    for result in results {
        writer.write_record([
            &*path.to_string_lossy(),
            result.checkpoint.name.as_str(),
            result.checkpoint.kind.to_string().as_str(),
            result.arrival_time.to_rfc3339().as_str(),
            result
                .duration
                .map(|d| duration_to_string(&d))
                .unwrap_or_default()
                .as_str(),
            duration_to_string(&result.total_timed).as_str(),
        ])?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let storage = FileSystemStorage::new(&get_storage_dir(&cli)?);
    let route = Arc::new(load_route(&cli, &storage).await.map_err(|e| {
        error!("Failed to load route {}. Error: {}", cli.route, e);
    })?);
    let matcher = Arc::new(CheckpointMatcher::new(cli.match_config()));
    info!(
        "Matching {} activities against route \"{}\" with {} checkpoints",
        cli.activities.len(),
        route.name,
        route.checkpoints.len()
    );

    let mut tasks = JoinSet::new();
    for (index, path) in cli.activities.iter().enumerate() {
        let path = path.clone();
        let route = route.clone();
        let matcher = matcher.clone();
        tasks.spawn(async move {
            let result = score_activity(path.clone(), route, matcher).await;
            (index, path, result)
        });
    }
    let mut outcomes = tasks.join_all().await;
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut csv_writer = csv::Writer::from_writer(io::stdout());
    if cli.format == OutputFormat::Csv {
        csv_writer
            .write_record([
                "activity",
                "checkpoint",
                "kind",
                "arrival_time",
                "duration",
                "total_timed",
            ])
            .map_err(|e| error!("Failed to write csv header. Error: {}", e))?;
    }

    let mut failed = false;
    for (_, path, outcome) in outcomes {
        let results = match outcome {
            Ok(results) => results,
            Err(e) => {
                error!("Failed to score {}. Error: {}", path.to_string_lossy(), e);
                failed = true;
                continue;
            }
        };
        match cli.format {
            OutputFormat::Json => print_json(&route, &path, &results)?,
            OutputFormat::Csv => write_csv(&mut csv_writer, &path, &results)
                .map_err(|e| error!("Failed to write csv. Error: {}", e))?,
        }
        if cli.save {
            let id = format!("{}_{}", route.name.to_lowercase(), activity_id(&path));
            match storage.save_results(&id, &results).await {
                Ok(file) => info!("Stored results in {}", file.to_string_lossy()),
                Err(e) => {
                    error!("Failed to store results {}. Error: {}", id, e);
                    failed = true;
                }
            }
        }
    }
    csv_writer
        .flush()
        .map_err(|e| error!("Failed to flush output. Error: {}", e))?;

    if failed { Err(()) } else { Ok(()) }
}
