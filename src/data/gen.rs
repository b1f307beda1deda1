use crate::core::{Error, Instance, Task, Time};
use rand::Rng;

/// Generates an instance of feasible tasks.
/// Processing times are drawn from `1..=max_time`, release times from `0..=max_release`
/// and every due date leaves up to `slack` units after the earliest possible completion.
///
/// # Errors
/// - If `tasks` is zero.
///
/// # Panics
/// - If `max_time` is not positive, or `max_release` or `slack` is negative.
pub fn random_instance(
    rng: &mut impl Rng,
    tasks: usize,
    max_time: Time,
    max_release: Time,
    slack: Time,
) -> Result<Instance, Error> {
    let tasks: Vec<_> = (0..tasks)
        .map(|_| {
            let release = rng.gen_range(0..=max_release);
            let processing = rng.gen_range(1..=max_time);
            let due = release + processing + rng.gen_range(0..=slack);
            Task::new(release, processing, due)
        })
        .collect::<Result<_, _>>()?;

    Instance::from_tasks(&tasks)
}
