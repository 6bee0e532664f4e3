//! Constants used throughout the library
//!
//! This module centralizes the named format patterns and the fixed
//! civil offset so callers and the other modules share one definition.

use chrono::FixedOffset;
use once_cell::sync::Lazy;

// Format patterns (compact letter grammar, see the `format` module)

/// Date only, hyphen-separated
pub const DATE: &str = "yyyy-MM-dd";
/// Date only, CJK year/month/day labels
pub const DATE_CN: &str = "yyyy年MM月dd日";
/// Date and 24-hour time, hyphen- and colon-separated
pub const DATETIME: &str = "yyyy-MM-dd HH:mm:ss";
/// Date and 24-hour time, CJK labels throughout
pub const DATETIME_CN: &str = "yyyy年MM月dd日 HH时mm分ss秒";
/// Date and 24-hour time, digits only
pub const DATETIME_COMPACT: &str = "yyyyMMddHHmmss";
/// Date only, digits only
pub const DATE_COMPACT: &str = "yyyyMMdd";
/// 24-hour time only, digits only
pub const TIME_COMPACT: &str = "HHmmss";

// Civil offset

/// Seconds east of UTC for the civil interpretation.
pub const CIVIL_OFFSET_SECONDS: i32 = 8 * 3600;

/// The fixed UTC+8 offset every civil conversion is evaluated at.
///
/// Epoch millisecond 0 corresponds to the civil date-time
/// 1970-01-01 08:00:00 under this offset. The host timezone is never
/// consulted on the civil pathway.
pub static CIVIL_OFFSET: Lazy<FixedOffset> = Lazy::new(|| {
    FixedOffset::east_opt(CIVIL_OFFSET_SECONDS).expect("offset is within the valid +/-24h range")
});
