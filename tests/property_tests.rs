//! Property-based tests for the parse/format guarantees.

use iso_duration::{parse, to_string, Duration};
use proptest::prelude::*;

proptest! {
    // Canonical output parses back to the same value.
    #[test]
    fn prop_format_then_parse(nanos in 0i128..=1_000_000_000_000_000_000_000_000i128) {
        let duration = Duration::from_nanos(nanos);
        let text = to_string(&duration);
        prop_assert_eq!(parse(&text).unwrap(), duration, "{}", text);
    }

    #[test]
    fn prop_whole_seconds_format_then_parse(secs in 0i64..=i64::MAX) {
        let duration = Duration::from_secs(secs);
        prop_assert_eq!(parse(&duration.format()).unwrap(), duration);
    }

    #[test]
    fn prop_format_is_idempotent(nanos in any::<i128>()) {
        let duration = Duration::from_nanos(nanos);
        prop_assert_eq!(duration.format(), duration.format());
    }

    // Canonical form is stable: formatting what it parses to gives it back.
    #[test]
    fn prop_canonical_is_fixed_point(
        input in "P([0-9]{1,4}[YMWD]){0,4}(T([0-9]{1,4}[HMS]){0,3})?"
    ) {
        let canonical = to_string(&parse(&input).unwrap());
        prop_assert_eq!(to_string(&parse(&canonical).unwrap()), canonical);
    }

    #[test]
    fn prop_parse_never_panics(input in "\\PC*") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_parse_never_panics_near_grammar(input in "P[0-9.,TYMWDHS ]{0,24}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_std_round_trip(secs in any::<u64>(), nanos in 0u32..1_000_000_000) {
        let host = std::time::Duration::new(secs, nanos);
        let duration = Duration::from(host);
        prop_assert_eq!(std::time::Duration::try_from(duration).unwrap(), host);
    }
}
