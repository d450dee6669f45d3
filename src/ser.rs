//! ISO 8601 duration formatting.
//!
//! This module provides the printer behind [`Duration::format`] and the
//! serde `Serialize` implementation.
//!
//! ## Overview
//!
//! The output is the canonical form of a duration:
//!
//! - **Greedy decomposition**: years, months, weeks, days, hours and minutes
//!   are taken as whole counts, coarsest first, using their nominal spans
//! - **Zero components omitted**: only nonzero units are written
//! - **Exact seconds**: whatever remains is written as seconds with up to nine
//!   fractional digits and no trailing zeros
//! - **Single separator**: `T` is written once, before the first time unit
//!
//! A zero duration formats as a bare `P`.
//!
//! ## Usage
//!
//! ```rust
//! use iso_duration::{parse, to_string};
//!
//! let duration = parse("PT60M").unwrap();
//! assert_eq!(to_string(&duration), "PT1H");
//!
//! let duration = parse("PT1M1.23456S").unwrap();
//! assert_eq!(duration.format(), "PT1M1.23456S");
//! ```

use crate::{Duration, FormatOptions, Unit};
use serde::{Serialize, Serializer};

const NANOS_PER_SECOND: u128 = Unit::Second.nanos().unsigned_abs();

/// Writes durations in canonical ISO 8601 notation.
pub(crate) struct Printer {
    output: String,
    options: FormatOptions,
    time_started: bool,
}

impl Printer {
    pub(crate) fn new(options: FormatOptions) -> Self {
        // "P" plus seven components rarely exceeds this.
        Printer {
            output: String::with_capacity(32),
            options,
            time_started: false,
        }
    }

    pub(crate) fn into_inner(self) -> String {
        self.output
    }

    pub(crate) fn print(&mut self, duration: &Duration) {
        self.time_started = false;
        if duration.is_negative() {
            self.output.push('-');
        }
        self.output.push('P');

        let mut remaining = duration.unsigned_abs();
        for unit in Unit::ALL {
            if unit == Unit::Second {
                self.write_seconds(remaining);
                continue;
            }
            let span = unit.nanos().unsigned_abs();
            if remaining >= span {
                let count = remaining / span;
                remaining -= count * span;
                self.write_component(unit, &count.to_string());
            }
        }
    }

    fn write_component(&mut self, unit: Unit, magnitude: &str) {
        if unit.is_time() && !self.time_started {
            self.output.push('T');
            self.time_started = true;
        }
        self.output.push_str(magnitude);
        self.output.push(unit.designator());
    }

    /// Writes what is left after the whole units, which is under one minute.
    fn write_seconds(&mut self, nanos: u128) {
        if nanos == 0 {
            return;
        }
        let whole = nanos / NANOS_PER_SECOND;
        let fraction = nanos % NANOS_PER_SECOND;

        let mut magnitude = whole.to_string();
        if fraction != 0 {
            let digits = format!("{fraction:09}");
            magnitude.push(self.options.decimal_separator.as_char());
            magnitude.push_str(digits.trim_end_matches('0'));
        }
        self.write_component(Unit::Second, &magnitude);
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
