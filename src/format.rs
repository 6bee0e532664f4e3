//! Pattern-based rendering of date/time values.
//!
//! Patterns use the compact letter grammar described in the crate
//! docs (`y` year, `M` month, `d` day, `H`/`h` hour, `m` minute, `s`
//! second; literals pass through). Rendering a civil value or an epoch
//! timestamp goes through the fixed UTC+8 civil pathway; rendering an
//! instant goes through the host-local zone, mirroring the legacy
//! parse pathway in [`crate::convert::parse_instant`].

use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::convert;
use crate::error::Result;
use crate::pattern;

/// Render a civil date-time as text.
///
/// # Arguments
/// * `civil` - The value to render
/// * `pattern` - Compact pattern such as `"yyyy-MM-dd HH:mm:ss"`;
///   letter case is significant (`H` is 24-hour, `h` is 12-hour)
pub fn format_civil(civil: NaiveDateTime, pattern: &str) -> String {
    civil.format(&pattern::to_chrono(pattern)).to_string()
}

/// Render an instant as text through the host-local zone.
pub fn format_instant(instant: DateTime<Utc>, pattern: &str) -> String {
    instant
        .with_timezone(&Local)
        .format(&pattern::to_chrono(pattern))
        .to_string()
}

/// Render an epoch millisecond timestamp as text.
///
/// The timestamp is projected to a civil date-time at UTC+8 first, so
/// millisecond 0 renders as 1970-01-01 08:00:00.
pub fn format_millis(millis: i64, pattern: &str) -> String {
    format_civil(convert::civil_from_millis(millis), pattern)
}

/// Re-render date/time text from one pattern to another.
///
/// # Arguments
/// * `text` - Date/time text conforming to `pattern_from`
/// * `pattern_from` - Pattern describing `text`
/// * `pattern_to` - Pattern to render the result with
///
/// # Errors
/// Returns [`crate::DateError::Format`] when `text` does not match
/// `pattern_from`.
pub fn reformat(text: &str, pattern_from: &str, pattern_to: &str) -> Result<String> {
    convert::parse_civil(text, pattern_from).map(|civil| format_civil(civil, pattern_to))
}

/// Render an epoch millisecond timestamp held in text.
///
/// # Errors
/// Returns [`crate::DateError::Number`] when the text is not a
/// well-formed signed integer.
pub fn reformat_millis_str(millis_text: &str, pattern_to: &str) -> Result<String> {
    convert::civil_from_millis_str(millis_text).map(|civil| format_civil(civil, pattern_to))
}

/// Render an epoch millisecond timestamp with the given pattern.
///
/// Alias of [`format_millis`] kept for symmetry with
/// [`reformat_millis_str`].
pub fn reformat_millis(millis: i64, pattern_to: &str) -> String {
    format_millis(millis, pattern_to)
}
