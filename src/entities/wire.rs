//! Deserialisation helpers for the backend's wire formats.
//!
//! Django's `DecimalField` serialises amounts as JSON strings (`"123.45"`) while
//! computed fields arrive as plain numbers, so amount fields accept either.
//! Date fields accept both `YYYY-MM-DD` and full ISO-8601 timestamps.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| E::custom(format!("invalid amount {s:?}: {e}"))),
        }
    }
}

/// Deserialises an amount given as a number or a numeric string.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?.into_f64()
}

/// Optional variant of [`amount`]; `null` maps to `None`.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::into_f64)
        .transpose()
}

fn parse_date<E: serde::de::Error>(raw: &str) -> Result<NaiveDate, E> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| E::custom(format!("invalid date {raw:?}: {e}")))
}

/// Deserialises a calendar date, discarding any time-of-day component.
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
}

/// Optional variant of [`date`].
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_date(&raw).map(Some),
        _ => Ok(None),
    }
}
