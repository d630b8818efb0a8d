// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::serde::duration;
use chrono::Duration;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{self, Deserializer, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub fn serialize<S>(durations: &BTreeMap<String, Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(durations.len()))?;
    for (name, dur) in durations {
        map.serialize_entry(name, &duration::duration_to_string(dur))?;
    }
    map.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DurationMapVisitor;

    impl<'de> Visitor<'de> for DurationMapVisitor {
        type Value = BTreeMap<String, Duration>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of names to duration strings")
        }

        fn visit_map<A>(self, mut map: A) -> Result<BTreeMap<String, Duration>, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut durations = BTreeMap::new();
            while let Some((name, s)) = map.next_entry::<String, String>()? {
                let d = duration::duration_from_str(&s).map_err(serde::de::Error::custom)?;
                durations.insert(name, d);
            }
            Ok(durations)
        }
    }

    deserializer.deserialize_map(DurationMapVisitor)
}
