use chrono::NaiveDate;
use datekit::constants::{DATE, DATETIME};
use datekit::convert::*;
use datekit::DateError;

#[test]
fn test_epoch_anchor_is_eight_oclock() {
    let expected = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
    assert_eq!(civil_from_millis(0), expected);
}

#[test]
fn test_civil_millis_round_trip() {
    let civil = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 45).unwrap();
    assert_eq!(civil_from_millis(civil_epoch_millis(civil)), civil);
}

#[test]
fn test_instant_civil_round_trip() {
    let instant = instant_from_millis(1_710_470_000_123);
    assert_eq!(to_instant(to_civil(instant)), instant);
}

#[test]
fn test_civil_epoch_seconds_at_utc8() {
    let civil = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
    assert_eq!(civil_epoch_seconds(civil), 0);
    assert_eq!(civil_epoch_millis(civil), 0);
}

#[test]
fn test_epoch_units_differ_by_factor() {
    let instant = instant_from_millis(1_710_470_000_999);
    assert_eq!(epoch_millis(instant), 1_710_470_000_999);
    assert_eq!(epoch_seconds(instant), 1_710_470_000);
}

#[test]
fn test_civil_from_millis_str() {
    let expected = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
    assert_eq!(civil_from_millis_str("0").unwrap(), expected);
}

#[test]
fn test_malformed_millis_text_is_a_number_error() {
    assert!(matches!(civil_from_millis_str("12x45"), Err(DateError::Number { .. })));
    assert!(matches!(instant_from_millis_str(""), Err(DateError::Number { .. })));
}

#[test]
fn test_parse_civil_datetime() {
    let civil = parse_civil("2024-03-15 10:30:45", DATETIME).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 45).unwrap();
    assert_eq!(civil, expected);
}

#[test]
fn test_parse_civil_date_only_is_midnight() {
    let civil = parse_civil("2024-03-15", DATE).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(civil, expected);
}

#[test]
fn test_parse_civil_cjk_date() {
    let civil = parse_civil("2024年03月15日", "yyyy年MM月dd日").unwrap();
    assert_eq!(civil.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn test_mismatched_pattern_is_a_format_error() {
    let err = parse_civil("2024/03/15", DATE).unwrap_err();
    assert!(matches!(err, DateError::Format { .. }));
    let rendered = err.to_string();
    assert!(rendered.contains("2024/03/15"));
    assert!(rendered.contains(DATE));
}

#[test]
fn test_time_only_pattern_cannot_build_a_civil_value() {
    assert!(matches!(parse_civil("103045", "HHmmss"), Err(DateError::Format { .. })));
}

#[test]
fn test_parse_instant_round_trips_through_local_rendering() {
    let instant = parse_instant("2024-03-15 10:30:45", DATETIME).unwrap();
    assert_eq!(datekit::format::format_instant(instant, DATETIME), "2024-03-15 10:30:45");
}

#[test]
fn test_parse_instant_rejects_mismatched_text() {
    assert!(matches!(parse_instant("garbage", DATETIME), Err(DateError::Format { .. })));
}
