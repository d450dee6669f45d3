//! Error types for ISO 8601 duration parsing and conversion.
//!
//! Parsing is the only fallible operation on the wire format; formatting a
//! [`Duration`](crate::Duration) never fails.
//!
//! ## Error Categories
//!
//! - **Prefix errors**: the input does not start with the `P` designator
//! - **Designator errors**: a unit letter is not valid for the date or time part
//! - **Number errors**: a numeric literal is malformed, fractional more than once,
//!   or not followed by a designator
//! - **Range errors**: the value does not fit the target type
//!
//! ## Error Context
//!
//! Every parse error carries the offending token and the line/column position
//! immediately after it, in the comma-normalized input.
//!
//! ## Examples
//!
//! ```rust
//! use iso_duration::{parse, Error, Position};
//!
//! let err = parse("P1X").unwrap_err();
//! assert!(matches!(err, Error::UnknownDateDesignator { .. }));
//! assert_eq!(err.token(), Some("X"));
//! assert_eq!(err.position(), Some(Position::new(1, 4)));
//! assert_eq!(err.to_string(), r#"unexpected date period designator "X" at 1:4"#);
//! ```

use std::fmt;
use thiserror::Error;

/// A 1-based line and column inside the parsed input.
///
/// The column points just past the token that caused an error, which is what
/// a line-oriented scanner reports after consuming that token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The first token is not the `P` designator.
    #[error("unexpected initial period designator {token:?} at {position}")]
    InvalidPrefix { token: String, position: Position },

    /// A letter before `T` is not one of `Y`, `M`, `W` or `D`.
    #[error("unexpected date period designator {token:?} at {position}")]
    UnknownDateDesignator { token: String, position: Position },

    /// A letter after `T` is not one of `H`, `M` or `S`.
    #[error("unexpected time period designator {token:?} at {position}")]
    UnknownTimeDesignator { token: String, position: Position },

    /// A numeric literal follows one that already had a fractional part.
    #[error("unexpected next period {token:?} following a previous decimal period at {position}")]
    DuplicateFraction { token: String, position: Position },

    /// A numeric literal could not be read as a finite number, or is too
    /// large for its unit.
    #[error("unexpected period {token:?} at {position}")]
    MalformedNumber { token: String, position: Position },

    /// The input ended right after a numeric literal.
    #[error("missing period designator after {token:?} at {position}")]
    MissingDesignator { token: String, position: Position },

    /// The accumulated duration does not fit in 128-bit nanoseconds.
    #[error("period {token:?} at {position} overflows the duration range")]
    Overflow { token: String, position: Position },

    /// A duration does not fit a host duration type.
    #[error("duration out of range: {0}")]
    OutOfRange(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Returns the offending token text for parse errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso_duration::parse;
    ///
    /// let err = parse("P1.5W2D").unwrap_err();
    /// assert_eq!(err.token(), Some("2"));
    /// ```
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::InvalidPrefix { token, .. }
            | Error::UnknownDateDesignator { token, .. }
            | Error::UnknownTimeDesignator { token, .. }
            | Error::DuplicateFraction { token, .. }
            | Error::MalformedNumber { token, .. }
            | Error::MissingDesignator { token, .. }
            | Error::Overflow { token, .. } => Some(token),
            Error::OutOfRange(_) | Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Returns where a parse error was detected.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::InvalidPrefix { position, .. }
            | Error::UnknownDateDesignator { position, .. }
            | Error::UnknownTimeDesignator { position, .. }
            | Error::DuplicateFraction { position, .. }
            | Error::MalformedNumber { position, .. }
            | Error::MissingDesignator { position, .. }
            | Error::Overflow { position, .. } => Some(*position),
            Error::OutOfRange(_) | Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Returns true if this error came from parsing duration text.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        self.position().is_some()
    }

    /// Creates an out-of-range error for failed host type conversions.
    pub fn out_of_range<T: fmt::Display>(msg: T) -> Self {
        Error::OutOfRange(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso_duration::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert_eq!(err.to_string(), "something went wrong");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
