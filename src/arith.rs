//! Calendar-field arithmetic, day boundaries and field-list construction.
//!
//! These helpers mirror the legacy wall-clock pathway: calendar fields
//! are read and written in the host-local zone, not at the fixed UTC+8
//! civil offset. Results that would leave the representable calendar
//! range saturate at the calendar bounds instead of failing, keeping
//! every operation total.

use chrono::{DateTime, Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::convert::resolve_local;

/// A calendar field that [`add`] can shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Add a signed amount to one calendar field of an instant.
///
/// # Arguments
/// * `instant` - The value to shift; never mutated
/// * `field` - Which calendar field the amount applies to
/// * `amount` - Signed shift, negative values subtract
///
/// Year and month shifts clamp to the last valid day of the resulting
/// month (Jan 31 + 1 month is Feb 28/29); the remaining fields are
/// fixed-length shifts.
pub fn add(instant: DateTime<Utc>, field: DateField, amount: i32) -> DateTime<Utc> {
    match field {
        DateField::Year => shift_months(instant, i64::from(amount) * 12),
        DateField::Month => shift_months(instant, i64::from(amount)),
        DateField::Day => shift_duration(instant, Duration::days(i64::from(amount))),
        DateField::Hour => shift_duration(instant, Duration::hours(i64::from(amount))),
        DateField::Minute => shift_duration(instant, Duration::minutes(i64::from(amount))),
        DateField::Second => shift_duration(instant, Duration::seconds(i64::from(amount))),
        DateField::Millisecond => shift_duration(instant, Duration::milliseconds(i64::from(amount))),
    }
}

/// Add a signed number of years.
pub fn add_years(instant: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    add(instant, DateField::Year, years)
}

/// Add a signed number of months.
pub fn add_months(instant: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    add(instant, DateField::Month, months)
}

/// Add a signed number of days.
pub fn add_days(instant: DateTime<Utc>, days: i32) -> DateTime<Utc> {
    add(instant, DateField::Day, days)
}

/// Add a signed number of hours.
pub fn add_hours(instant: DateTime<Utc>, hours: i32) -> DateTime<Utc> {
    add(instant, DateField::Hour, hours)
}

/// Add a signed number of minutes.
pub fn add_minutes(instant: DateTime<Utc>, minutes: i32) -> DateTime<Utc> {
    add(instant, DateField::Minute, minutes)
}

/// Add a signed number of seconds.
pub fn add_seconds(instant: DateTime<Utc>, seconds: i32) -> DateTime<Utc> {
    add(instant, DateField::Second, seconds)
}

/// Add a signed number of milliseconds.
pub fn add_millis(instant: DateTime<Utc>, millis: i32) -> DateTime<Utc> {
    add(instant, DateField::Millisecond, millis)
}

/// Local start of the day the instant falls on.
///
/// Hour, minute and second are zeroed; the sub-second field passes
/// through untouched.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    let local = instant.with_timezone(&Local).naive_local();
    let truncated = local
        .with_hour(0)
        .and_then(|dt| dt.with_minute(0))
        .and_then(|dt| dt.with_second(0))
        .unwrap_or(local);
    resolve_local(truncated)
}

/// Local midnight of the given calendar day.
pub fn start_of_day_ymd(year: i32, month: i32, day: i32) -> DateTime<Utc> {
    from_fields(&[year, month, day])
}

/// Local 23:59:59.999 of the day the instant falls on.
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    let local = instant.with_timezone(&Local).naive_local();
    let end = local
        .date()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or(local);
    resolve_local(end)
}

/// Local 23:59:59.999 of the given calendar day.
pub fn end_of_day_ymd(year: i32, month: i32, day: i32) -> DateTime<Utc> {
    from_fields(&[year, month, day, 23, 59, 59, 999])
}

/// Build an instant from a leading sequence of calendar fields.
///
/// # Arguments
/// * `fields` - Up to seven values in the order year, month, day,
///   hour, minute, second, millisecond; fields past the seventh are
///   ignored
///
/// Missing trailing fields default to 1 for year/month/day and 0 for
/// the time fields, so `&[2024, 3, 15]` is 2024-03-15 00:00:00.000.
/// Out-of-range fields roll into the following period (month 13 is
/// January of the next year). An empty slice returns the current
/// moment from the host clock, not a zeroed date.
///
/// Fields are interpreted in the host-local zone, matching the other
/// helpers in this module.
pub fn from_fields(fields: &[i32]) -> DateTime<Utc> {
    if fields.is_empty() {
        return Utc::now();
    }

    let mut padded = [1, 1, 1, 0, 0, 0, 0];
    for (slot, value) in padded.iter_mut().zip(fields) {
        *slot = *value;
    }

    let min_year = NaiveDate::MIN.year();
    let max_year = NaiveDate::MAX.year();
    let anchor = NaiveDate::from_ymd_opt(padded[0].clamp(min_year, max_year), 1, 1)
        .unwrap_or(NaiveDate::MIN);

    let date = shift_date_months(anchor, i64::from(padded[1]) - 1);
    let date = shift_date_days(date, i64::from(padded[2]) - 1);

    let time_of_day = Duration::hours(i64::from(padded[3]))
        + Duration::minutes(i64::from(padded[4]))
        + Duration::seconds(i64::from(padded[5]))
        + Duration::milliseconds(i64::from(padded[6]));
    let naive = date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(time_of_day)
        .unwrap_or(if time_of_day < Duration::zero() {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        });

    resolve_local(naive)
}

fn shift_months(instant: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    let local = instant.with_timezone(&Local);
    let shifted = if months >= 0 {
        u32::try_from(months)
            .ok()
            .and_then(|m| local.checked_add_months(Months::new(m)))
    } else {
        u32::try_from(months.unsigned_abs())
            .ok()
            .and_then(|m| local.checked_sub_months(Months::new(m)))
    };
    shifted.map(|dt| dt.with_timezone(&Utc)).unwrap_or(if months >= 0 {
        DateTime::<Utc>::MAX_UTC
    } else {
        DateTime::<Utc>::MIN_UTC
    })
}

fn shift_duration(instant: DateTime<Utc>, delta: Duration) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(if delta >= Duration::zero() {
        DateTime::<Utc>::MAX_UTC
    } else {
        DateTime::<Utc>::MIN_UTC
    })
}

fn shift_date_months(date: NaiveDate, months: i64) -> NaiveDate {
    if months >= 0 {
        u32::try_from(months)
            .ok()
            .and_then(|m| date.checked_add_months(Months::new(m)))
            .unwrap_or(NaiveDate::MAX)
    } else {
        u32::try_from(months.unsigned_abs())
            .ok()
            .and_then(|m| date.checked_sub_months(Months::new(m)))
            .unwrap_or(NaiveDate::MIN)
    }
}

fn shift_date_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64)).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs())).unwrap_or(NaiveDate::MIN)
    }
}
