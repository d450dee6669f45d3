//! ISO 8601 duration parsing.
//!
//! This module provides [`parse`], which turns duration text into a
//! [`Duration`], along with the serde `Deserialize` implementation.
//!
//! ## Overview
//!
//! - **Single pass**: one left-to-right scan, no backtracking
//! - **Two lexical modes**: a numeric literal is expected after `P` and after
//!   every designator, a designator letter after every literal
//! - **Error reporting**: every error names the offending token and the
//!   line/column just past it
//!
//! Commas are accepted as decimal signs and are rewritten to periods before
//! scanning, so reported tokens always use a period.
//!
//! ## Usage
//!
//! ```rust
//! use iso_duration::parse;
//!
//! let duration = parse("PT2H1,5M").unwrap();
//! assert_eq!(duration.as_secs(), 7_290);
//! ```
//!
//! Designators are not checked for order or repetition. Components simply
//! accumulate:
//!
//! ```rust
//! use iso_duration::parse;
//!
//! assert_eq!(parse("P1D1Y").unwrap(), parse("P1Y1D").unwrap());
//! assert_eq!(parse("P1Y1Y").unwrap(), parse("P2Y").unwrap());
//! ```

use crate::{Duration, Error, Position, Result, Unit};
use serde::{de, Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;

/// Parses an ISO 8601 duration such as `P3Y6M4DT12H30M5S`.
///
/// # Errors
///
/// Returns a parse error naming the offending token and its position when the
/// input does not follow the `P[nY][nM][nW][nD][T[nH][nM][nS]]` grammar, when
/// more than one literal is fractional, or when the total overflows.
pub fn parse(input: &str) -> Result<Duration> {
    let normalized = normalize(input);
    Parser::new(&normalized)
        .parse()
        .map(|duration| {
            trace!("parsed {input:?} as {} nanoseconds", duration.as_nanos());
            duration
        })
        .map_err(|err| {
            debug!("rejected duration {input:?}: {err}");
            err
        })
}

fn normalize(input: &str) -> Cow<'_, str> {
    if input.contains(',') {
        Cow::Owned(input.replace(',', "."))
    } else {
        Cow::Borrowed(input)
    }
}

/// What the scanner expects next.
#[derive(Debug)]
enum State<'a> {
    /// Nothing consumed yet; the first token must be `P`.
    Prefix,
    /// Expecting a numeric literal or the `T` separator.
    Number,
    /// A literal was read and must be closed by a designator.
    Designator(Literal<'a>),
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Char(char),
    Number(&'a str),
}

/// A numeric literal waiting for its designator.
#[derive(Debug)]
struct Literal<'a> {
    text: &'a str,
    whole: i128,
    fraction: f64,
    end: Position,
}

/// The duration parser. Holds only per-call state and is consumed by `parse`.
pub(crate) struct Parser<'a> {
    input: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    time_mode: bool,
    fractional: bool, // a literal with a nonzero fraction was read
    total: i128,
}

impl<'a> Parser<'a> {
    /// Creates a parser over input that has already had commas normalized.
    pub(crate) fn new(input: &'a str) -> Self {
        Parser {
            input,
            offset: 0,
            line: 1,
            column: 1,
            time_mode: false,
            fractional: false,
            total: 0,
        }
    }

    pub(crate) fn parse(mut self) -> Result<Duration> {
        let mut state = State::Prefix;
        loop {
            state = match state {
                // No whitespace is skipped before the prefix.
                State::Prefix => match self.next_char() {
                    Some('P') => State::Number,
                    other => {
                        return Err(Error::InvalidPrefix {
                            token: other.map(String::from).unwrap_or_default(),
                            position: self.here(),
                        })
                    }
                },
                State::Number => match self.scan_number() {
                    None => return Ok(Duration::from_nanos(self.total)),
                    Some(Token::Char('T')) => {
                        self.time_mode = true;
                        State::Number
                    }
                    Some(Token::Char(c)) => {
                        return Err(Error::MalformedNumber {
                            token: c.to_string(),
                            position: self.here(),
                        })
                    }
                    Some(Token::Number(text)) => State::Designator(self.read_literal(text)?),
                },
                State::Designator(literal) => match self.scan_char() {
                    None => {
                        return Err(Error::MissingDesignator {
                            token: literal.text.to_string(),
                            position: literal.end,
                        })
                    }
                    Some(designator) => {
                        self.accumulate(&literal, designator)?;
                        State::Number
                    }
                },
            };
        }
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.peek_char() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn skip_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Scans one character as a token of its own.
    fn scan_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.next_char()
    }

    /// Scans a literal of digits with an optional `.` fraction, or a single
    /// character when the input does not start a literal here.
    fn scan_number(&mut self) -> Option<Token<'a>> {
        self.skip_whitespace();
        let input = self.input;
        let start = self.offset;
        let starts_literal = matches!(
            &input.as_bytes()[start..],
            [b'0'..=b'9', ..] | [b'.', b'0'..=b'9', ..]
        );
        if !starts_literal {
            return self.next_char().map(Token::Char);
        }

        self.skip_digits();
        if self.peek_char() == Some('.') {
            self.next_char();
            self.skip_digits();
        }
        Some(Token::Number(&input[start..self.offset]))
    }

    /// Splits a literal into its whole part and fraction, truncating toward zero.
    fn read_literal(&mut self, text: &'a str) -> Result<Literal<'a>> {
        if self.fractional {
            return Err(Error::DuplicateFraction {
                token: text.to_string(),
                position: self.here(),
            });
        }

        let malformed = || Error::MalformedNumber {
            token: text.to_string(),
            position: self.here(),
        };
        let (whole, fraction) = match text.find('.') {
            Some(dot) => (&text[..dot], &text[dot..]),
            None => (text, ""),
        };
        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<i128>().map_err(|_| malformed())?
        };
        // A bare trailing "." carries no fraction.
        let fraction = if fraction.len() > 1 {
            fraction.parse::<f64>().map_err(|_| malformed())?
        } else {
            0.0
        };

        self.fractional = fraction != 0.0;
        Ok(Literal {
            text,
            whole,
            fraction,
            end: self.here(),
        })
    }

    fn accumulate(&mut self, literal: &Literal<'a>, designator: char) -> Result<()> {
        let Some(unit) = Unit::from_designator(designator, self.time_mode) else {
            let token = designator.to_string();
            let position = self.here();
            return Err(if self.time_mode {
                Error::UnknownTimeDesignator { token, position }
            } else {
                Error::UnknownDateDesignator { token, position }
            });
        };

        let span = unit.nanos();
        // fraction <= 1, so this adds at most one more unit.
        let fraction = (literal.fraction * span as f64).round() as i128;
        let component = literal
            .whole
            .checked_mul(span)
            .and_then(|whole| whole.checked_add(fraction))
            .ok_or_else(|| Error::MalformedNumber {
                token: literal.text.to_string(),
                position: literal.end,
            })?;
        let total = self
            .total
            .checked_add(component)
            .ok_or_else(|| Error::Overflow {
                token: literal.text.to_string(),
                position: literal.end,
            })?;

        trace!(
            "added {}{designator} as {unit}s at {}, total {total}ns",
            literal.text,
            self.here()
        );
        self.total = total;
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}

struct DurationVisitor;

impl<'de> de::Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO 8601 duration string such as P3Y6M4DT12H30M5S")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Duration, E> {
        parse(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> std::result::Result<Duration, E> {
        let s = std::str::from_utf8(value).map_err(E::custom)?;
        parse(s).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(input: &str) -> f64 {
        parse(input).unwrap().as_secs_f64()
    }

    #[test]
    fn test_single_components() {
        assert_eq!(secs("P1Y"), 31_536_000.0);
        assert_eq!(secs("P1M"), 2_592_000.0);
        assert_eq!(secs("P1W"), 604_800.0);
        assert_eq!(secs("P1D"), 86_400.0);
        assert_eq!(secs("PT1H"), 3_600.0);
        assert_eq!(secs("PT1M"), 60.0);
        assert_eq!(secs("PT1S"), 1.0);
    }

    #[test]
    fn test_month_and_minute_share_a_letter() {
        assert_eq!(secs("P1M"), 30.0 * 86_400.0);
        assert_eq!(secs("PT1M"), 60.0);
        assert_eq!(secs("P1MT1M"), 30.0 * 86_400.0 + 60.0);
    }

    #[test]
    fn test_fractions() {
        assert_eq!(secs("P1.75D"), 151_200.0);
        assert_eq!(secs("P0.75D"), 64_800.0);
        assert_eq!(secs("PT2.5S"), 2.5);
        assert_eq!(secs("PT.5S"), 0.5);
        assert_eq!(secs("PT5.S"), 5.0);
        assert_eq!(
            parse("PT0.123456789S").unwrap().as_nanos(),
            123_456_789
        );
    }

    #[test]
    fn test_comma_decimal_sign() {
        assert_eq!(parse("PT2H1,5M").unwrap(), parse("PT2H1.5M").unwrap());
        assert_eq!(secs("PT2H1,5M"), 7_290.0);
    }

    #[test]
    fn test_zero_fraction_does_not_block_later_literals() {
        assert_eq!(secs("P1.0DT1H"), 90_000.0);
    }

    #[test]
    fn test_bare_prefix_and_separator() {
        assert_eq!(parse("P").unwrap(), Duration::ZERO);
        assert_eq!(parse("PT").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_whitespace_between_tokens() {
        assert_eq!(secs("P 1D T 2H"), 93_600.0);
        assert_eq!(secs("PT1H\n"), 3_600.0);

        let err = parse("P1D\nT1X").unwrap_err();
        assert!(matches!(err, Error::UnknownTimeDesignator { .. }));
        assert_eq!(err.position(), Some(Position::new(2, 4)));
    }

    #[test]
    fn test_invalid_prefix() {
        let err = parse("1D").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                token: "1".to_string(),
                position: Position::new(1, 2),
            }
        );

        let err = parse("").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                token: String::new(),
                position: Position::new(1, 1),
            }
        );

        assert!(matches!(parse("p1D"), Err(Error::InvalidPrefix { .. })));
        assert!(matches!(parse("-P1D"), Err(Error::InvalidPrefix { .. })));
    }

    #[test]
    fn test_leading_whitespace_is_not_a_prefix() {
        let err = parse(" P1D").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                token: " ".to_string(),
                position: Position::new(1, 2),
            }
        );

        let err = parse("\nP1D").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPrefix {
                token: "\n".to_string(),
                position: Position::new(2, 1),
            }
        );

        assert!(matches!(parse("\t PT1H"), Err(Error::InvalidPrefix { .. })));
    }

    #[test]
    fn test_unknown_designators() {
        let err = parse("P1X").unwrap_err();
        assert!(matches!(err, Error::UnknownDateDesignator { .. }));
        assert_eq!(err.position(), Some(Position::new(1, 4)));

        let err = parse("PT1X").unwrap_err();
        assert!(matches!(err, Error::UnknownTimeDesignator { .. }));
        assert_eq!(err.position(), Some(Position::new(1, 5)));

        // Time letters are not valid before T and date letters not after it.
        assert!(matches!(parse("P1H"), Err(Error::UnknownDateDesignator { .. })));
        assert!(matches!(parse("PT1D"), Err(Error::UnknownTimeDesignator { .. })));
        assert!(matches!(parse("P1d"), Err(Error::UnknownDateDesignator { .. })));
    }

    #[test]
    fn test_separator_where_designator_expected() {
        let err = parse("P1T2H").unwrap_err();
        assert_eq!(err.token(), Some("T"));
        assert!(matches!(err, Error::UnknownDateDesignator { .. }));
    }

    #[test]
    fn test_duplicate_fraction() {
        let err = parse("P1.5W2D").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateFraction {
                token: "2".to_string(),
                position: Position::new(1, 7),
            }
        );
        assert!(matches!(
            parse("P1.5DT1.5H"),
            Err(Error::DuplicateFraction { .. })
        ));
    }

    #[test]
    fn test_malformed_number() {
        let err = parse("PD").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNumber {
                token: "D".to_string(),
                position: Position::new(1, 3),
            }
        );
        assert!(matches!(parse("P1DD"), Err(Error::MalformedNumber { .. })));
        assert!(matches!(parse("P.D"), Err(Error::MalformedNumber { .. })));

        let digits = "9".repeat(40);
        let err = parse(&format!("P{digits}D")).unwrap_err();
        assert_eq!(err.token(), Some(digits.as_str()));
        assert!(matches!(err, Error::MalformedNumber { .. }));
    }

    #[test]
    fn test_missing_designator() {
        let err = parse("P1").unwrap_err();
        assert_eq!(
            err,
            Error::MissingDesignator {
                token: "1".to_string(),
                position: Position::new(1, 3),
            }
        );
        assert!(matches!(
            parse("PT1.5 "),
            Err(Error::MissingDesignator { .. })
        ));
    }

    #[test]
    fn test_literal_too_large_for_its_unit() {
        // Fits i128 as a count, but not once scaled to nanoseconds.
        let years = "9".repeat(30);
        let err = parse(&format!("P{years}Y")).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNumber {
                token: years,
                position: Position::new(1, 32),
            }
        );
    }

    #[test]
    fn test_overflow() {
        // Each component fits on its own, the sum does not.
        let years = format!("5{}", "0".repeat(21));
        let err = parse(&format!("P{years}Y{years}Y")).unwrap_err();
        assert_eq!(
            err,
            Error::Overflow {
                token: years.clone(),
                position: Position::new(1, 47),
            }
        );
        assert!(parse(&format!("P{years}Y")).is_ok());
    }

    #[test]
    fn test_lenient_ordering_and_repetition() {
        assert_eq!(parse("P1D1Y").unwrap(), parse("P1Y1D").unwrap());
        assert_eq!(parse("PT1S1H").unwrap(), parse("PT1H1S").unwrap());
        assert_eq!(parse("P1Y1Y").unwrap(), parse("P2Y").unwrap());
    }

    #[test]
    fn test_scanner_tokens() {
        let mut parser = Parser::new("12.5X.7 Y");
        assert_eq!(parser.scan_number(), Some(Token::Number("12.5")));
        assert_eq!(parser.scan_number(), Some(Token::Char('X')));
        assert_eq!(parser.scan_number(), Some(Token::Number(".7")));
        assert_eq!(parser.scan_char(), Some('Y'));
        assert_eq!(parser.here(), Position::new(1, 10));
        assert_eq!(parser.scan_char(), None);
    }
}
