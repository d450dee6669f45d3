//! Converting between ISO 8601 durations and std/chrono duration types.
//!
//! Run with: cargo run --example host_types

use iso_duration::{parse, Duration};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let timeout = parse("PT1M30.5S")?;

    let host: std::time::Duration = timeout.try_into()?;
    println!("std::time::Duration: {:?}", host);

    let delta: chrono::TimeDelta = timeout.try_into()?;
    println!("chrono::TimeDelta:   {}", delta);

    // std durations are never negative, so going back always succeeds
    let elapsed = std::time::Duration::from_millis(3_723_004);
    println!("elapsed:             {}", Duration::from(elapsed));

    // A negative duration has no std equivalent
    let negative = Duration::from_secs(-5);
    if let Err(err) = std::time::Duration::try_from(negative) {
        println!("{}: {}", negative, err);
    }

    Ok(())
}
