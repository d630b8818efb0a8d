// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use chrono::Duration;
use serde::{self, Deserialize, Deserializer, Serializer};

/// Formats `duration` as `HH:MM:SS.mmm`, prefixed with `-` when negative.
pub fn duration_to_string(duration: &Duration) -> String {
    let sign = if *duration < Duration::zero() { "-" } else { "" };
    let duration = duration.abs();
    let millis = duration.num_milliseconds();
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    let millis = millis % 1000;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Parses a string like `"01:02:02.000"` or `"-00:00:05"` into a [`Duration`].
///
/// The fractional part of the seconds is optional.
pub fn duration_from_str(s: &str) -> Result<Duration, String> {
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut parts = s.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("invalid duration \"{s}\", expected HH:MM:SS.mmm"));
    };
    let hours: i64 = hours
        .parse()
        .map_err(|e| format!("invalid hours in \"{s}\": {e}"))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|e| format!("invalid minutes in \"{s}\": {e}"))?;
    let (seconds, millis) = match seconds.split_once('.') {
        Some((seconds, fraction)) => {
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid fraction in \"{s}\""));
            }
            let fraction = format!("{fraction:0<3}");
            let millis: i64 = fraction[..3]
                .parse()
                .map_err(|e| format!("invalid fraction in \"{s}\": {e}"))?;
            (seconds, millis)
        }
        None => (seconds, 0),
    };
    let seconds: i64 = seconds
        .parse()
        .map_err(|e| format!("invalid seconds in \"{s}\": {e}"))?;
    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(format!(
            "invalid duration \"{s}\", minutes and seconds must be between 0 and 59"
        ));
    }

    let duration = Duration::try_hours(hours)
        .zip(Duration::try_minutes(minutes))
        .and_then(|(h, m)| h.checked_add(&m))
        .zip(Duration::try_seconds(seconds))
        .and_then(|(hm, sec)| hm.checked_add(&sec))
        .zip(Duration::try_milliseconds(millis))
        .and_then(|(hms, ms)| hms.checked_add(&ms))
        .ok_or_else(|| format!("duration \"{s}\" is out of range"))?;
    Ok(if negative { -duration } else { duration })
}

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&duration_to_string(duration))
}

/// Deserialize a time string like "00:50:12.000" into a `chrono::Duration`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    duration_from_str(&s).map_err(serde::de::Error::custom)
}
