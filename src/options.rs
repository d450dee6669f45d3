//! Configuration options for formatting durations.
//!
//! This module provides types to customize the canonical output:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`DecimalSeparator`]: Choice of decimal sign for fractional seconds
//!
//! Parsing takes no options. Both decimal signs are always accepted on input.
//!
//! ## Examples
//!
//! ```rust
//! use iso_duration::{parse, to_string_with_options, DecimalSeparator, FormatOptions};
//!
//! let duration = parse("PT2.5S").unwrap();
//!
//! let options = FormatOptions::new().with_decimal_separator(DecimalSeparator::Comma);
//! assert_eq!(to_string_with_options(&duration, options), "PT2,5S");
//! ```

/// Decimal sign used between whole and fractional seconds.
///
/// ISO 8601 allows both a comma and a full stop.
///
/// # Examples
///
/// ```rust
/// use iso_duration::DecimalSeparator;
///
/// assert_eq!(DecimalSeparator::Period.as_char(), '.');
/// assert_eq!(DecimalSeparator::Comma.as_char(), ',');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecimalSeparator {
    #[default]
    Period,
    Comma,
}

impl DecimalSeparator {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            DecimalSeparator::Period => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Configuration options for duration formatting.
///
/// # Examples
///
/// ```rust
/// use iso_duration::{DecimalSeparator, FormatOptions};
///
/// // Canonical output
/// let options = FormatOptions::new();
/// assert_eq!(options.decimal_separator, DecimalSeparator::Period);
///
/// // Comma before fractional seconds
/// let options = FormatOptions::new().with_decimal_separator(DecimalSeparator::Comma);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub decimal_separator: DecimalSeparator,
}

impl FormatOptions {
    /// Creates default options, which produce the canonical form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decimal sign written before fractional seconds.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.decimal_separator = separator;
        self
    }
}
