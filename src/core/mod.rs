mod error;
mod ordering;
mod problem;
mod solution;
mod timeline;
mod util;

pub use error::*;
pub use ordering::*;
pub use problem::*;
pub use solution::*;
pub use timeline::*;
pub use util::*;

/// Schedules the tasks of an instance on a single processor.
pub trait Scheduler {
    /// Schedules the tasks of the given instance.
    fn schedule(&mut self, instance: &Instance) -> Schedule;

    /// Returns whether the scheduler minimizes the maximum lateness.
    fn optimal(&self) -> bool {
        false
    }

    /// Returns the name of the scheduler.
    fn name(&self) -> &'static str;
}
