//! Conversions between epoch timestamps, instants and civil date-times.
//!
//! The civil side ([`NaiveDateTime`]) is always evaluated at the fixed
//! UTC+8 offset from [`constants::CIVIL_OFFSET`]. The legacy instant
//! parsing pathway ([`parse_instant`]) instead interprets wall-clock
//! text in the host-local zone; the two pathways intentionally differ
//! and both are part of the contract.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use log::trace;

use crate::constants;
use crate::error::{DateError, Result};
use crate::pattern;

/// Project an instant into a civil date-time at UTC+8.
pub fn to_civil(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&*constants::CIVIL_OFFSET).naive_local()
}

/// Project a civil date-time at UTC+8 into an absolute instant.
pub fn to_instant(civil: NaiveDateTime) -> DateTime<Utc> {
    (civil - *constants::CIVIL_OFFSET).and_utc()
}

/// Build an instant from an epoch millisecond timestamp.
///
/// Timestamps beyond the representable calendar range saturate at the
/// calendar bounds instead of failing.
pub fn instant_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Build an instant from an epoch millisecond timestamp held in text.
///
/// # Errors
/// Returns [`DateError::Number`] when the text is not a well-formed
/// signed integer.
pub fn instant_from_millis_str(text: &str) -> Result<DateTime<Utc>> {
    parse_epoch_millis(text).map(instant_from_millis)
}

/// Build a civil date-time from an epoch millisecond timestamp.
///
/// Millisecond 0 yields 1970-01-01 08:00:00, not midnight.
pub fn civil_from_millis(millis: i64) -> NaiveDateTime {
    to_civil(instant_from_millis(millis))
}

/// Build a civil date-time from an epoch millisecond timestamp held in text.
///
/// # Errors
/// Returns [`DateError::Number`] when the text is not a well-formed
/// signed integer.
pub fn civil_from_millis_str(text: &str) -> Result<NaiveDateTime> {
    parse_epoch_millis(text).map(civil_from_millis)
}

/// Parse date/time text into a civil date-time.
///
/// # Arguments
/// * `text` - Date/time text such as `"2024-03-15 10:30:00"`
/// * `pattern` - Compact pattern the text must conform to, such as
///   `"yyyy-MM-dd HH:mm:ss"`; letter case is significant
///
/// A date-only pattern yields the civil midnight of the parsed day.
///
/// # Errors
/// Returns [`DateError::Format`] when the text does not match the
/// pattern exactly.
pub fn parse_civil(text: &str, pattern: &str) -> Result<NaiveDateTime> {
    parse_naive(text, pattern)
}

/// Parse date/time text into an instant using the host-local zone.
///
/// This is the legacy pathway: unlike every civil conversion it is NOT
/// pinned to UTC+8, and `"1970-01-01 00:00:00"` maps to epoch 0 only
/// when the host zone is UTC.
///
/// # Errors
/// Returns [`DateError::Format`] when the text does not match the
/// pattern exactly.
pub fn parse_instant(text: &str, pattern: &str) -> Result<DateTime<Utc>> {
    parse_naive(text, pattern).map(resolve_local)
}

/// Epoch seconds of an instant.
pub fn epoch_seconds(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// Epoch milliseconds of an instant.
pub fn epoch_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

/// Epoch seconds of a civil date-time, projected at UTC+8.
pub fn civil_epoch_seconds(civil: NaiveDateTime) -> i64 {
    to_instant(civil).timestamp()
}

/// Epoch milliseconds of a civil date-time, projected at UTC+8.
pub fn civil_epoch_millis(civil: NaiveDateTime) -> i64 {
    to_instant(civil).timestamp_millis()
}

/// Interpret a naive wall-clock value in the host zone.
///
/// Ambiguous or nonexistent local times fall back to a UTC reading of
/// the same fields.
pub(crate) fn resolve_local(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        .with_timezone(&Utc)
}

fn parse_epoch_millis(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|source| DateError::Number {
        text: text.to_string(),
        source,
    })
}

fn parse_naive(text: &str, pattern: &str) -> Result<NaiveDateTime> {
    let fmt = pattern::to_chrono(pattern);
    match NaiveDateTime::parse_from_str(text, &fmt) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !pattern::has_time_fields(pattern) => {
            trace!("parsing '{}' as date-only for pattern '{}'", text, pattern);
            NaiveDate::parse_from_str(text, &fmt)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|source| format_error(text, pattern, source))
        }
        Err(source) => Err(format_error(text, pattern, source)),
    }
}

fn format_error(text: &str, pattern: &str, source: chrono::ParseError) -> DateError {
    DateError::Format {
        text: text.to_string(),
        pattern: pattern.to_string(),
        source,
    }
}
