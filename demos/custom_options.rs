//! Customizing duration output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use iso_duration::{parse, to_string_with_options, DecimalSeparator, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let duration = parse("PT1M1.23456S")?;

    // Default format (period)
    println!("Default (period):");
    println!("{}\n", duration);

    // Comma, the preferred ISO 8601 decimal sign
    println!("Comma decimal sign:");
    let options = FormatOptions::new().with_decimal_separator(DecimalSeparator::Comma);
    let text = to_string_with_options(&duration, options);
    println!("{}\n", text);

    // Either form parses back to the same value
    assert_eq!(parse(&text)?, duration);
    println!("✓ Round-trip successful");

    Ok(())
}
