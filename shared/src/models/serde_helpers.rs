//! Lenient deserializers for request payloads
//!
//! Browser forms post `null` for untouched text inputs and `""` or a bare
//! `YYYY-MM-DD` for date inputs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Deserialize a string that treats null as empty
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Optional value parsed from its string form; a blank string is `None`
///
/// Query strings carry `?employeeId=` for an unset filter.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse a timestamp in any of the accepted shapes
///
/// - RFC 3339 (`2024-05-01T10:00:00Z`, `2024-05-01T10:00:00+02:00`)
/// - naive date-time, read as UTC (`2024-05-01T10:00:00`, `2024-05-01T10:00:00.123`)
/// - bare date, read as midnight UTC (`2024-05-01`)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Optional timestamp: null, `""`, or any shape accepted by [`parse_timestamp`]
pub mod flexible_datetime {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_timestamp(value).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date/time: {value}"))
            }),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(value, s)
    }
}
