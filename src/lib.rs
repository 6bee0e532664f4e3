//! Datekit - date/time conversion and calendar arithmetic helpers
//!
//! This library provides a small set of free functions for converting
//! between epoch timestamps, absolute instants and civil date-times,
//! for pattern-based formatting and parsing, and for calendar-field
//! arithmetic and day boundaries.
//!
//! Two representations are used throughout:
//!
//! * **Instant** - [`chrono::DateTime<Utc>`](chrono::DateTime), a
//!   timezone-agnostic point in time carried as an epoch offset.
//! * **Civil date-time** - [`chrono::NaiveDateTime`], plain
//!   year/month/day/hour/minute/second fields. Every conversion between
//!   the civil type and timestamps or instants is evaluated at a fixed
//!   UTC+8 offset, never the host timezone: epoch millisecond 0 is the
//!   civil date-time `1970-01-01 08:00:00`.
//!
//! A second, deliberately host-local pathway exists alongside the
//! pinned one: [`convert::parse_instant`], [`format::format_instant`]
//! and the [`arith`] helpers interpret wall-clock fields in the host
//! zone. The two pathways are distinct on purpose and must not be
//! merged.
//!
//! # Modules
//!
//! * [`constants`] - Named format-pattern constants and the civil offset
//! * [`convert`] - Timestamp / instant / civil date-time conversions
//! * [`format`] - Pattern-based rendering and re-rendering
//! * [`arith`] - Field addition, day boundaries, field-list construction
//! * [`error`] - Typed parse errors

/// Calendar-field arithmetic, day boundaries and field-list construction
pub mod arith;

/// Named format-pattern constants and the fixed civil offset
pub mod constants;

/// Conversions between timestamps, instants and civil date-times
pub mod convert;

/// Typed errors for parse operations
pub mod error;

/// Pattern-based formatting and re-rendering
pub mod format;

mod pattern;

// Re-export error types for convenient access
pub use error::{DateError, Result};
