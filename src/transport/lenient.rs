//! Serde helpers for provider scalars that arrive as JSON strings, numbers, or `null`.
//!
//! Used through `#[serde(default, deserialize_with = "...")]` on result records.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

use crate::domain::wire::{DATE_FORMAT, DATE_TIME_FORMAT};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Text(text)) if text.trim().is_empty() => None,
        other => other,
    })
}

/// Parse a money value using the invariant format (`.` decimal separator).
pub(crate) fn parse_decimal(token: &str) -> Option<Decimal> {
    let token = token.trim();
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

/// Parse a provider timestamp (`yyyy-MM-dd HH:mm:ss`, ISO `T` variant, or a bare date).
pub(crate) fn parse_date_time(token: &str) -> Option<NaiveDateTime> {
    let token = token.trim();
    NaiveDateTime::parse_from_str(token, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(token, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(token, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(_)) => Err(D::Error::custom(
            "expected money field to be JSON string or number",
        )),
        Some(value) => {
            let text = value.into_text();
            parse_decimal(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid decimal value: {text}")))
        }
    }
}

/// Money field that defaults to zero when absent or `null`.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_decimal(deserializer)?.unwrap_or_default())
}

pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Number(value)) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid count: {value}"))),
        Some(Scalar::Text(value)) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid count: {value}"))),
        Some(Scalar::Bool(_)) => Err(D::Error::custom("expected count, found boolean")),
    }
}

/// Count field that defaults to zero when absent or `null`.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_count(deserializer)?.unwrap_or_default())
}

/// Boolean that also accepts `"true"`/`"false"`/`"1"`/`"0"`; absent or `null` is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match scalar(deserializer)? {
        None => Ok(false),
        Some(Scalar::Bool(value)) => Ok(value),
        Some(other) => {
            let text = other.into_text();
            match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(D::Error::custom(format!("invalid boolean: {text}"))),
            }
        }
    }
}

/// Text field; numbers are kept in their JSON spelling, empty strings become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?.map(Scalar::into_text))
}

pub fn opt_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match scalar(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(value)) => parse_date_time(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}"))),
        Some(_) => Err(D::Error::custom("expected timestamp string")),
    }
}

/// List that the provider may send as `null` when empty.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wire enum where the provider may send `null` or an empty string for "unknown".
pub fn opt_wire<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(text) if !text.trim().is_empty() => {
            T::deserialize(serde::de::value::StringDeserializer::<D::Error>::new(text)).map(Some)
        }
        _ => Ok(None),
    }
}
