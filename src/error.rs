//! Typed errors for parse operations.
//!
//! Only the two parsing pathways can fail: pattern-based parsing of
//! date/time text and integer parsing of numeric timestamp text. Both
//! errors carry the offending input and propagate unhandled to the
//! caller.

use std::num::ParseIntError;

/// Convenience alias for results carrying a [`DateError`].
pub type Result<T> = std::result::Result<T, DateError>;

/// Errors raised by the parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// The text does not conform to the supplied pattern.
    #[error("'{text}' does not match pattern '{pattern}'")]
    Format {
        text: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A string expected to hold a numeric timestamp does not.
    #[error("invalid numeric timestamp '{text}'")]
    Number {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
