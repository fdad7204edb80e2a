//! Parsing of caller-supplied text into typed values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::Value;

use super::metadata::FieldKind;

/// Accepted date spellings, tried in order.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Accepted time spellings, tried in order.
pub const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%-H:%M:%S", "%-H:%M"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date in one of `DATE_FORMATS`.
///
/// The text must be exactly what the format would print for the parsed date, so
/// `2024-3-5` or `2024-02-30` are rejected.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .filter(|date| date.format(format).to_string() == text)
    })
}

/// Parses a time in one of `TIME_FORMATS`, with the same exactness rule as dates.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS.iter().find_map(|format| {
        NaiveTime::parse_from_str(text, format)
            .ok()
            .filter(|time| time.format(format).to_string() == text)
    })
}

pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Parses a finite float; `NaN` and infinities are rejected.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts filter text into the value bound for a field of `kind`.
///
/// Booleans only accept the literals `true` and `false`.
///
/// # Returns
/// - `Some(Value)` - Typed value
/// - `None` - Text cannot represent a value of `kind`
pub fn coerce_text(kind: FieldKind, text: &str) -> Option<Value> {
    match kind {
        FieldKind::String => Some(Value::from(text.to_string())),
        FieldKind::Integer => parse_integer(text).map(Value::from),
        FieldKind::Float => parse_float(text).map(Value::from),
        FieldKind::Boolean => match text {
            "true" => Some(Value::from(true)),
            "false" => Some(Value::from(false)),
            _ => None,
        },
        FieldKind::Date => parse_date(text).map(Value::from),
        FieldKind::DateTime => parse_datetime(text).map(Value::from),
        FieldKind::Time => parse_time(text).map(Value::from),
    }
}
