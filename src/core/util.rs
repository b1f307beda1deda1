use super::{Instance, Interval, PriorityOrdering, Schedule, TaskSchedule, Time};

/// A builder for creating a schedule.
/// It tracks the remaining work of every task and the accumulated lateness.
#[derive(Clone, Debug)]
pub struct ScheduleBuilder<'a> {
    instance: &'a Instance,
    remaining: Vec<Time>,
    schedules: Vec<TaskSchedule>,
    lateness: Time,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a new schedule builder with nothing processed yet.
    #[must_use]
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            remaining: instance.processing_times().to_vec(),
            schedules: vec![TaskSchedule::default(); instance.len()],
            lateness: 0,
        }
    }

    /// Creates the ordering of all tasks by release time.
    #[must_use]
    pub fn new_release_ordering(&self) -> PriorityOrdering<Time> {
        let releases = self.instance.release_times().iter().copied();
        releases.enumerate().map(|(id, release)| (release, id)).collect()
    }

    /// Moves every task released by `time` into the due date ordering.
    pub fn release(
        &self,
        time: Time,
        releases: &mut PriorityOrdering<Time>,
        pending: &mut PriorityOrdering<Time>,
    ) {
        while releases.peek_min_key().is_some_and(|release| release <= time) {
            let Some(id) = releases.extract_min() else {
                unreachable!("A peeked release is always extracted");
            };
            pending.insert(self.instance.due_dates()[id], id);
        }
    }

    /// Returns the work left on a task.
    #[must_use]
    pub fn remaining(&self, task: usize) -> Time {
        self.remaining[task]
    }

    /// Runs a task on `[start, end)`.
    /// If the task has no work left afterwards, its lateness is accounted for.
    pub fn run(&mut self, task: usize, start: Time, end: Time) {
        debug_assert!(start < end && end - start <= self.remaining[task]);

        self.remaining[task] -= end - start;
        self.schedules[task].push(Interval::new(start, end));

        if self.remaining[task] == 0 {
            self.lateness += end - self.instance.due_dates()[task];
        }
    }
}

impl From<ScheduleBuilder<'_>> for Schedule {
    fn from(builder: ScheduleBuilder<'_>) -> Self {
        Self::new(builder.instance.clone(), builder.schedules, builder.lateness)
    }
}
