//! The designator table.
//!
//! Calendar-like units use nominal spans: a year is always 365 days and a
//! month always 30 days. The letter `M` means month before the `T`
//! separator and minute after it.

use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;
const NANOS_PER_MONTH: i128 = 30 * NANOS_PER_DAY;
const NANOS_PER_YEAR: i128 = 365 * NANOS_PER_DAY;

/// A unit of an ISO 8601 duration component.
///
/// # Examples
///
/// ```rust
/// use iso_duration::Unit;
///
/// assert_eq!(Unit::from_designator('M', false), Some(Unit::Month));
/// assert_eq!(Unit::from_designator('M', true), Some(Unit::Minute));
/// assert_eq!(Unit::from_designator('S', false), None);
/// assert_eq!(Unit::Week.nanos(), 7 * 24 * 3_600 * 1_000_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every unit, coarsest first. This is the order components are written in.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Resolves a designator letter. `time_mode` is true once `T` has been read.
    #[must_use]
    pub const fn from_designator(designator: char, time_mode: bool) -> Option<Unit> {
        if time_mode {
            match designator {
                'H' => Some(Unit::Hour),
                'M' => Some(Unit::Minute),
                'S' => Some(Unit::Second),
                _ => None,
            }
        } else {
            match designator {
                'Y' => Some(Unit::Year),
                'M' => Some(Unit::Month),
                'W' => Some(Unit::Week),
                'D' => Some(Unit::Day),
                _ => None,
            }
        }
    }

    #[must_use]
    pub const fn designator(self) -> char {
        match self {
            Unit::Year => 'Y',
            Unit::Month | Unit::Minute => 'M',
            Unit::Week => 'W',
            Unit::Day => 'D',
            Unit::Hour => 'H',
            Unit::Second => 'S',
        }
    }

    /// Returns true for units written after the `T` separator.
    #[must_use]
    pub const fn is_time(self) -> bool {
        matches!(self, Unit::Hour | Unit::Minute | Unit::Second)
    }

    /// The nominal span of one unit, in nanoseconds.
    #[must_use]
    pub const fn nanos(self) -> i128 {
        match self {
            Unit::Year => NANOS_PER_YEAR,
            Unit::Month => NANOS_PER_MONTH,
            Unit::Week => NANOS_PER_WEEK,
            Unit::Day => NANOS_PER_DAY,
            Unit::Hour => NANOS_PER_HOUR,
            Unit::Minute => NANOS_PER_MINUTE,
            Unit::Second => NANOS_PER_SECOND,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
