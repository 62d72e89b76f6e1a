//! Calendar-date parsing shared by the wire models and the formatters, and
//! the serde adapters the models use for loosely-typed backend fields.
//!
//! The backend is inconsistent about dates: some fields carry a plain
//! `YYYY-MM-DD`, others a full ISO-8601 timestamp. Both are accepted here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Parses a calendar day from a plain date or an ISO-8601 timestamp.
///
/// For timestamps carrying an offset, the day is the one in that offset, so
/// `2024-03-05T23:30:00-05:00` is the 5th.
///
/// Returns `None` for blank or unparseable input.
///
/// # Examples
///
/// ```
/// use ess_engine::models::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(parse_calendar_date("2024-03-05"), Some(day));
/// assert_eq!(parse_calendar_date("2024-03-05T09:15:00.000Z"), Some(day));
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Serde adapter for a required calendar date in either wire form.
pub(crate) mod calendar_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar date: {}", raw)))
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        date.serialize(serializer)
    }
}

/// Serde adapter for an optional date where null, missing and garbage all
/// become `None`.
pub(crate) mod lenient_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_calendar_date))
    }

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        date.serialize(serializer)
    }
}

/// Deserializes an explicit `null` as the field's default.
///
/// Pair with `#[serde(default)]` so an absent key behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
