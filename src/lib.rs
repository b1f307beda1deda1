#![deny(clippy::all, clippy::cargo, clippy::expect_used, clippy::unwrap_used)]
#![deny(clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(clippy::unimplemented, clippy::redundant_type_annotations)]

use anyhow::Result;
use std::io::BufRead;

pub mod algo;
pub mod core;
pub mod data;

pub use algo::schedule;

/// Runs the given scheduler on the instance read from reader and writes the schedule to stdout.
/// Also writes the timeline and the lateness to stdout.
///
/// # Errors
/// - If the instance could not be read from the reader.
/// - If the schedule could not be serialized.
///
/// # Panics
///  - If the schedule is invalid in debug mode.
pub fn run_reader(scheduler: &mut dyn core::Scheduler, reader: &mut impl BufRead) -> Result<()> {
    let instance: core::Instance = data::deserialize(reader)?;
    let schedule = scheduler.schedule(&instance);

    debug_assert!(schedule.verify(), "Schedule is invalid: {schedule:?}");

    println!("{}", data::to_string(&schedule)?);
    print!("{}", schedule.timeline());
    println!("{}", schedule.lateness());

    Ok(())
}
