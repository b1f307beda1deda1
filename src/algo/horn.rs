use crate::core::{Error, Instance, PriorityOrdering, Schedule, ScheduleBuilder, Scheduler, Time};

/// Horn's algorithm for one processor with release times, due dates and preemption.
/// At every release it runs the released, unfinished task with the earliest due date,
/// which minimizes the maximum lateness.
/// It runs in `O(n^2 log n)` time in the worst case.
#[derive(Clone, Debug, Default)]
pub struct Horn;

impl Scheduler for Horn {
    fn schedule(&mut self, instance: &Instance) -> Schedule {
        horn(instance)
    }

    fn optimal(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Horn"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SCHEDULERS)]
static INSTANCE: fn() -> Box<dyn Scheduler> = || Box::new(Horn);

/// Schedules the tasks given by arrays aligned by index with Horn's algorithm.
///
/// # Errors
/// - If `number_of_tasks` is zero or differs from the length of an array.
/// - If a release time is negative or a processing time is not positive.
pub fn schedule(
    number_of_tasks: usize,
    release_times: &[Time],
    processing_times: &[Time],
    due_dates: &[Time],
) -> Result<Schedule, Error> {
    let instance = Instance::new(
        number_of_tasks,
        release_times.to_vec(),
        processing_times.to_vec(),
        due_dates.to_vec(),
    )?;
    Ok(horn(&instance))
}

fn horn(instance: &Instance) -> Schedule {
    let mut schedule = ScheduleBuilder::new(instance);
    let mut releases = schedule.new_release_ordering();
    let mut pending = PriorityOrdering::with_capacity(instance.len());

    let mut time = 0;
    let mut preemptions = 0_usize;

    while !pending.is_empty() || !releases.is_empty() {
        if pending.is_empty() {
            if let Some(release) = releases.peek_min_key() {
                time = release;
            }
        }

        schedule.release(time, &mut releases, &mut pending);

        let Some(task) = pending.extract_min() else {
            unreachable!("A task is always released after idling");
        };

        // Every pending release is in the future now.
        debug_assert!(releases.iter().all(|(release, _)| release > time));
        let next_arrival = releases.peek_min_key();

        let due = instance.due_dates()[task];
        let mut step = schedule.remaining(task);
        if let Some(arrival) = next_arrival.filter(|&arrival| time + step > arrival) {
            step = arrival - time;
            pending.insert(due, task);
            preemptions += 1;
            log::trace!("task {task} preempted at {arrival}");
        }

        schedule.run(task, time, time + step);
        time += step;
    }

    let schedule = Schedule::from(schedule);
    log::debug!(
        "Horn scheduled {} tasks until {time} with {preemptions} preemptions, lateness {}",
        instance.len(),
        schedule.lateness()
    );
    schedule
}
