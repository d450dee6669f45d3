//! The elapsed-time value produced by parsing and consumed by formatting.
//!
//! A [`Duration`] is a signed count of nanoseconds. It carries no calendar
//! information: once parsed, `P1M` and `P30D` are the same value.

use crate::ser::Printer;
use crate::{Error, FormatOptions, Result, Unit};
use std::fmt;
use std::str::FromStr;

const NANOS_PER_SECOND: i128 = Unit::Second.nanos();

/// A signed elapsed time with nanosecond resolution.
///
/// # Examples
///
/// ```rust
/// use iso_duration::Duration;
///
/// let duration: Duration = "P1.75D".parse().unwrap();
/// assert_eq!(duration.as_secs(), 151_200);
/// assert_eq!(duration.to_string(), "P1DT18H");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration {
    nanos: i128,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0 };

    #[must_use]
    pub const fn from_nanos(nanos: i128) -> Self {
        Duration { nanos }
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Duration {
            nanos: secs as i128 * NANOS_PER_SECOND,
        }
    }

    /// Creates a duration of `count` nominal units, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso_duration::{Duration, Unit};
    ///
    /// let months = Duration::from_unit(6, Unit::Month).unwrap();
    /// assert_eq!(months, Duration::from_unit(180, Unit::Day).unwrap());
    /// ```
    #[must_use]
    pub fn from_unit(count: i64, unit: Unit) -> Option<Self> {
        i128::from(count).checked_mul(unit.nanos()).map(Duration::from_nanos)
    }

    #[must_use]
    pub const fn as_nanos(&self) -> i128 {
        self.nanos
    }

    /// Whole seconds, truncated toward zero.
    #[must_use]
    pub const fn as_secs(&self) -> i128 {
        self.nanos / NANOS_PER_SECOND
    }

    /// The sub-second remainder. Has the same sign as the duration.
    #[must_use]
    pub const fn subsec_nanos(&self) -> i32 {
        (self.nanos % NANOS_PER_SECOND) as i32
    }

    /// Total elapsed seconds as a float.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso_duration::parse;
    ///
    /// assert_eq!(parse("PT1M1.23456S").unwrap().as_secs_f64(), 61.23456);
    /// ```
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.as_secs() as f64 + f64::from(self.subsec_nanos()) / NANOS_PER_SECOND as f64
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.nanos < 0
    }

    /// The magnitude in nanoseconds. Defined for every value, including the minimum.
    #[must_use]
    pub const fn unsigned_abs(&self) -> u128 {
        self.nanos.unsigned_abs()
    }

    #[must_use]
    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.nanos.checked_add(rhs.nanos).map(Duration::from_nanos)
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.nanos.checked_sub(rhs.nanos).map(Duration::from_nanos)
    }

    #[must_use]
    pub fn checked_neg(self) -> Option<Duration> {
        self.nanos.checked_neg().map(Duration::from_nanos)
    }

    /// Formats this duration in canonical ISO 8601 notation.
    ///
    /// A negative duration is written as `-` followed by the canonical form of
    /// its magnitude. [`parse`](crate::parse) does not accept the sign, so
    /// negative output does not parse back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso_duration::Duration;
    ///
    /// assert_eq!(Duration::from_secs(7_290).format(), "PT2H1M30S");
    /// assert_eq!(Duration::ZERO.format(), "P");
    /// ```
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with_options(&FormatOptions::default())
    }

    #[must_use]
    pub fn format_with_options(&self, options: &FormatOptions) -> String {
        let mut printer = Printer::new(options.clone());
        printer.print(self);
        printer.into_inner()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::de::parse(s)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Duration::from_nanos(
            i128::from(d.as_secs()) * NANOS_PER_SECOND + i128::from(d.subsec_nanos()),
        )
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<Self> {
        if d.is_negative() {
            return Err(Error::out_of_range(format!(
                "{d} is negative and has no std::time::Duration equivalent"
            )));
        }
        let secs = u64::try_from(d.as_secs())
            .map_err(|_| Error::out_of_range(format!("{d} exceeds std::time::Duration")))?;
        Ok(std::time::Duration::new(secs, d.subsec_nanos().unsigned_abs()))
    }
}

impl From<chrono::TimeDelta> for Duration {
    fn from(d: chrono::TimeDelta) -> Self {
        Duration::from_nanos(
            i128::from(d.num_seconds()) * NANOS_PER_SECOND + i128::from(d.subsec_nanos()),
        )
    }
}

impl TryFrom<Duration> for chrono::TimeDelta {
    type Error = Error;

    fn try_from(d: Duration) -> Result<Self> {
        // chrono keeps the sub-second part non-negative.
        let secs = d.nanos.div_euclid(NANOS_PER_SECOND);
        let nanos = d.nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        i64::try_from(secs)
            .ok()
            .and_then(|secs| chrono::TimeDelta::new(secs, nanos))
            .ok_or_else(|| Error::out_of_range(format!("{d} exceeds chrono::TimeDelta")))
    }
}
