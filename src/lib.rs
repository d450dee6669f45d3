//! # iso_duration
//!
//! Parsing and formatting of ISO 8601 durations such as `P3Y6M4DT12H30M5S`.
//!
//! ## What is an ISO 8601 duration?
//!
//! ISO 8601 writes an amount of time as a `P` followed by numbers tagged with
//! unit letters: `Y`ears, `M`onths, `W`eeks and `D`ays, then a `T` and
//! `H`ours, `M`inutes and `S`econds. `PT1H30M` is an hour and a half.
//!
//! ## Key Features
//!
//! - **Exact**: durations are stored as signed 128-bit nanoseconds
//! - **Strict errors**: every parse error names the offending token and its
//!   line/column position
//! - **Canonical output**: formatting always produces the same string for the
//!   same value, largest units first
//! - **Interop**: conversions to and from `std::time::Duration` and
//!   `chrono::TimeDelta`, and serde support as a string
//!
//! Years and months are nominal: a year is 365 days and a month 30 days.
//! This library expresses application-level durations, not calendar dates.
//!
//! ## Quick Start
//!
//! ```rust
//! use iso_duration::{parse, to_string, Duration};
//!
//! let duration = parse("P1.75D").unwrap();
//! assert_eq!(duration.as_secs(), 151_200);
//!
//! // Formatting picks the largest units first
//! assert_eq!(to_string(&duration), "P1DT18H");
//!
//! // Or go through FromStr and Display
//! let duration: Duration = "PT2H1,5M".parse().unwrap();
//! assert_eq!(duration.to_string(), "PT2H1M30S");
//! ```
//!
//! ### Error Reporting
//!
//! ```rust
//! use iso_duration::{parse, Error, Position};
//!
//! match parse("P1.5W2D") {
//!     Err(Error::DuplicateFraction { token, position }) => {
//!         assert_eq!(token, "2");
//!         assert_eq!(position, Position::new(1, 7));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use iso_duration::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Job {
//!     timeout: Duration,
//! }
//!
//! let job: Job = serde_json::from_str(r#"{"timeout":"PT90S"}"#).unwrap();
//! assert_eq!(serde_json::to_string(&job).unwrap(), r#"{"timeout":"PT1M30S"}"#);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass; allocates only when the input contains a comma
//! - **Formatting**: constant work per unit into one small buffer
//! - **No shared state**: every call is independent and safe to run concurrently
//!
//! ## Grammar
//!
//! The accepted grammar, unit table and canonical form are documented in the
//! [`grammar`] module.
//!
//! ## Logging
//!
//! With the `logging` feature, the parser reports through the `log` crate:
//! accepted inputs and each added component at trace level, rejected inputs at
//! debug level.

#[macro_use]
mod logging;

pub mod de;
pub mod duration;
pub mod error;
pub mod grammar;
pub mod options;
pub mod ser;
pub mod unit;

pub use de::parse;
pub use duration::Duration;
pub use error::{Error, Position, Result};
pub use options::{DecimalSeparator, FormatOptions};
pub use unit::Unit;

use std::io;

/// Formats a duration in canonical ISO 8601 notation.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{to_string, Duration};
///
/// assert_eq!(to_string(&Duration::from_secs(3_600)), "PT1H");
/// ```
#[must_use]
pub fn to_string(duration: &Duration) -> String {
    duration.format()
}

/// Formats a duration with custom options.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{to_string_with_options, DecimalSeparator, Duration, FormatOptions};
///
/// let options = FormatOptions::new().with_decimal_separator(DecimalSeparator::Comma);
/// let duration = Duration::from_nanos(1_500_000_000);
/// assert_eq!(to_string_with_options(&duration, options), "PT1,5S");
/// ```
#[must_use]
pub fn to_string_with_options(duration: &Duration, options: FormatOptions) -> String {
    duration.format_with_options(&options)
}

/// Writes a duration in canonical ISO 8601 notation to a writer.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{to_writer, Duration};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Duration::from_secs(60)).unwrap();
/// assert_eq!(buffer, b"PT1M");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, duration: &Duration) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, duration, FormatOptions::default())
}

/// Writes a duration to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    duration: &Duration,
    options: FormatOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(duration, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses a duration from bytes of ISO 8601 text.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{from_slice, Duration};
///
/// assert_eq!(from_slice(b"PT1M").unwrap(), Duration::from_secs(60));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not a valid duration.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Duration> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    parse(s)
}

/// Parses a duration from an I/O stream of ISO 8601 text.
///
/// Trailing whitespace, such as a final newline, is accepted. The text must
/// still begin with `P`.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{from_reader, Duration};
/// use std::io::Cursor;
///
/// let duration = from_reader(Cursor::new(b"P1D\n")).unwrap();
/// assert_eq!(duration, Duration::from_secs(86_400));
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the text is not a
/// valid duration.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Duration>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}
