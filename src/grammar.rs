//! Accepted ISO 8601 Duration Grammar
//!
//! This module documents the subset of ISO 8601 durations implemented by this
//! library.
//!
//! # Overview
//!
//! ISO 8601 writes an amount of elapsed time as a `P` (period) followed by
//! numbers, each tagged with a unit letter. Time-of-day units come after a
//! `T` separator:
//!
//! ```text
//! P 3Y 6M 4D T 12H 30M 5S
//! │ │  │  │  │ │   │   └─ 5 seconds
//! │ │  │  │  │ │   └───── 30 minutes
//! │ │  │  │  │ └───────── 12 hours
//! │ │  │  │  └─────────── time separator
//! │ │  │  └────────────── 4 days
//! │ │  └───────────────── 6 months
//! │ └──────────────────── 3 years
//! └────────────────────── period designator
//! ```
//!
//! (Spaced out for readability; the canonical form is `P3Y6M4DT12H30M5S`.)
//!
//! # Syntax
//!
//! ```text
//! duration   = "P" *date-part [ "T" *time-part ]
//! date-part  = number ( "Y" / "M" / "W" / "D" )
//! time-part  = number ( "H" / "M" / "S" )
//! number     = 1*DIGIT [ decimal *DIGIT ] / decimal 1*DIGIT
//! decimal    = "." / ","
//! ```
//!
//! **Rules**:
//! - The input must start with `P`. Designators are uppercase only.
//! - `M` is months before `T` and minutes after it.
//! - Every number must be followed by a designator from the current part.
//! - At most one number may be fractional. Any number following a fractional
//!   one is rejected, so the fraction belongs on the last component.
//! - Whitespace between tokens is skipped, but the first character must be
//!   the `P` itself.
//! - There is no sign and no exponent.
//!
//! Designator order and repetition are not checked. `P1D1Y` is one year and
//! one day, `P1Y1Y` is two years.
//!
//! # Units
//!
//! | Designator | Part | Unit | Nominal span |
//! |------------|------|------|--------------|
//! | `Y` | date | year | 365 days |
//! | `M` | date | month | 30 days |
//! | `W` | date | week | 7 days |
//! | `D` | date | day | 24 hours |
//! | `H` | time | hour | 60 minutes |
//! | `M` | time | minute | 60 seconds |
//! | `S` | time | second | 1 second |
//!
//! Years and months are fixed-width. A parsed duration is a plain amount of
//! nanoseconds with no calendar attached, so `P1M` and `P30D` are equal.
//!
//! # Fractions
//!
//! A fractional component contributes its fraction of the unit's nominal
//! span, rounded to the nearest nanosecond:
//!
//! ```text
//! P1.75D   → 1 day + 0.75 × 24h     = 151200 s
//! PT2H1,5M → 2 hours + 1.5 minutes  = 7290 s
//! ```
//!
//! # Canonical Output
//!
//! Formatting decomposes a duration greedily, coarsest unit first:
//!
//! | Input | Canonical |
//! |-------|-----------|
//! | `P365D` | `P1Y` |
//! | `P30D` | `P1M` |
//! | `P7D` | `P1W` |
//! | `PT24H` | `P1D` |
//! | `PT60M` | `PT1H` |
//! | `PT60S` | `PT1M` |
//! | `P0.75D` | `PT18H` |
//! | `PT1M1.23456S` | `PT1M1.23456S` |
//!
//! - Zero components are omitted; a zero duration is `P`.
//! - `T` appears once, only when an hour, minute or second is written.
//! - Seconds carry up to nine fractional digits, without trailing zeros or
//!   exponents.
//! - Negative durations are written as `-` followed by the canonical form of
//!   their magnitude. The parser does not accept the sign.
//!
//! # Errors
//!
//! | Input | Error | Token | Position |
//! |-------|-------|-------|----------|
//! | `1D` | `InvalidPrefix` | `1` | 1:2 |
//! | ` P1D` | `InvalidPrefix` | ` ` | 1:2 |
//! | `P1X` | `UnknownDateDesignator` | `X` | 1:4 |
//! | `PT1X` | `UnknownTimeDesignator` | `X` | 1:5 |
//! | `P1.5W2D` | `DuplicateFraction` | `2` | 1:7 |
//! | `PD` | `MalformedNumber` | `D` | 1:3 |
//! | `P1` | `MissingDesignator` | `1` | 1:3 |
//!
//! Positions are 1-based and point just past the offending token.
//!
//! # Not Supported
//!
//! - Dates, times of day and intervals (`2024-01-15T10:30:00Z`, `start/end`)
//! - Calendar-relative arithmetic: months are always 30 days
//! - The alternative `PYYYY-MM-DDThh:mm:ss` format

// This module contains only documentation; no implementation code
