// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Reads an activity from a CSV export.
//!
//! The first row has to name the columns. Column names of the common export
//! formats (TCX, GPX, gpsbabel) are mapped onto the sample fields, see
//! [`TIMESTAMP_NAMES`], [`LATITUDE_NAMES`], [`LONGITUDE_NAMES`] and
//! [`ALTITUDE_NAMES`]. Names are compared case-insensitively, unknown
//! columns are ignored.

use chrono::{DateTime, NaiveDateTime, Utc};
use common::{
    activity::{Activity, ActivityError},
    sample::Sample,
};
use std::io;
use thiserror::Error;
use tracing::debug;

pub const TIMESTAMP_NAMES: &[&str] = &["timestamp", "date_time", "time"];
pub const LATITUDE_NAMES: &[&str] = &["latitude", "lat", "@lat", "latitudedegrees"];
pub const LONGITUDE_NAMES: &[&str] = &["longitude", "lon", "lng", "@lon", "longitudedegrees"];
pub const ALTITUDE_NAMES: &[&str] = &["altitude", "ele", "altitudemeters"];

const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("invalid value in data row {row}: {message}")]
    InvalidValue { row: usize, message: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Activity(#[from] ActivityError),
}

/// Positions of the sample fields within a CSV record.
#[derive(Debug, PartialEq)]
struct Columns {
    timestamp: usize,
    latitude: usize,
    longitude: usize,
    altitude: Option<usize>,
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ReadError> {
        Ok(Columns {
            timestamp: find_column(headers, TIMESTAMP_NAMES)
                .ok_or(ReadError::MissingColumn("timestamp"))?,
            latitude: find_column(headers, LATITUDE_NAMES)
                .ok_or(ReadError::MissingColumn("latitude"))?,
            longitude: find_column(headers, LONGITUDE_NAMES)
                .ok_or(ReadError::MissingColumn("longitude"))?,
            altitude: find_column(headers, ALTITUDE_NAMES),
        })
    }
}

/// Parses RFC 3339 timestamps and, as fallback, `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
                .ok()
                .map(|t| t.and_utc())
        })
}

fn field<'a>(record: &'a csv::StringRecord, column: usize, row: usize) -> Result<&'a str, ReadError> {
    record.get(column).ok_or_else(|| ReadError::InvalidValue {
        row,
        message: format!("column {column} is missing"),
    })
}

fn parse_coordinate(value: &str, row: usize, name: &str) -> Result<f64, ReadError> {
    value.parse().map_err(|e| ReadError::InvalidValue {
        row,
        message: format!("{name} \"{value}\": {e}"),
    })
}

/// Reads all samples from `reader` and validates them into an [`Activity`].
///
/// # Errors
/// - [`ReadError::MissingColumn`] if no header matches a required field.
/// - [`ReadError::InvalidValue`] for unparsable timestamps or coordinates.
/// - [`ReadError::Activity`] if the samples are empty or not chronological.
pub fn read_activity<R: io::Read>(reader: R) -> Result<Activity, ReadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut samples = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let timestamp = field(&record, columns.timestamp, row)?;
        let timestamp = parse_timestamp(timestamp).ok_or_else(|| ReadError::InvalidValue {
            row,
            message: format!("timestamp \"{timestamp}\""),
        })?;
        let latitude = parse_coordinate(field(&record, columns.latitude, row)?, row, "latitude")?;
        let longitude =
            parse_coordinate(field(&record, columns.longitude, row)?, row, "longitude")?;
        let mut sample = Sample::new(timestamp, latitude, longitude);
        if let Some(column) = columns.altitude
            && let Some(altitude) = record.get(column).filter(|v| !v.is_empty())
        {
            sample = sample.with_altitude(parse_coordinate(altitude, row, "altitude")?);
        }
        samples.push(sample);
    }
    debug!("Read {} samples", samples.len());
    Ok(Activity::new(samples)?)
}
