//! Parsing and formatting ISO 8601 durations.
//!
//! Run with: cargo run --example simple

use iso_duration::{parse, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    for input in ["P365D", "PT90M", "P1.75D", "PT2H1,5M", "P3Y6M4DT12H30M5S"] {
        let duration = parse(input)?;
        println!(
            "{:<18} {:>12} s   canonical: {}",
            input,
            duration.as_secs_f64(),
            to_string(&duration)
        );
    }

    // Errors carry the offending token and where it ended
    for input in ["1D", "P1X", "P1.5W2D"] {
        if let Err(err) = parse(input) {
            println!("{:<18} error: {}", input, err);
        }
    }

    Ok(())
}
