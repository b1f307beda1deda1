use super::{Instance, Time, Timeline};
use serde::Serialize;

/// A contiguous run segment `[start, end)` of one task.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Interval {
    start: Time,
    end: Time,
}

impl Interval {
    pub(crate) const fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    #[must_use]
    pub const fn len(&self) -> Time {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns whether the time unit starting at `time` lies in the interval.
    #[must_use]
    pub const fn contains(&self, time: Time) -> bool {
        self.start <= time && time < self.end
    }
}

/// Run segments of one task in increasing time order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaskSchedule {
    intervals: Vec<Interval>,
}

impl TaskSchedule {
    pub(crate) fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns the end of the last run segment.
    #[must_use]
    pub fn completion_time(&self) -> Option<Time> {
        self.intervals.last().map(Interval::end)
    }

    /// Returns the total time the task was run.
    #[must_use]
    pub fn processed(&self) -> Time {
        self.intervals.iter().map(Interval::len).sum()
    }
}

/// A schedule of all tasks of an instance on a single processor.
/// It's immutable once an algorithm returns it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Schedule {
    instance: Instance,
    schedules: Vec<TaskSchedule>,
    lateness: Time,
}

impl Schedule {
    pub(crate) const fn new(instance: Instance, schedules: Vec<TaskSchedule>, lateness: Time) -> Self {
        Self {
            instance,
            schedules,
            lateness,
        }
    }

    #[must_use]
    pub const fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Returns the run segments of every task, indexed by task id.
    #[must_use]
    pub fn schedules(&self) -> &[TaskSchedule] {
        &self.schedules
    }

    /// Returns the sum of lateness over all tasks.
    #[must_use]
    pub const fn lateness(&self) -> Time {
        self.lateness
    }

    #[must_use]
    pub fn completion_time(&self, task: usize) -> Option<Time> {
        self.schedules.get(task)?.completion_time()
    }

    /// Returns the completion time of the task minus its due date.
    #[must_use]
    pub fn task_lateness(&self, task: usize) -> Option<Time> {
        let due = self.instance.due_dates().get(task)?;
        self.completion_time(task).map(|completion| completion - due)
    }

    /// Returns the largest lateness of any task.
    #[must_use]
    pub fn max_lateness(&self) -> Option<Time> {
        (0..self.schedules.len())
            .filter_map(|task| self.task_lateness(task))
            .max()
    }

    /// Returns a displayable timeline of the schedule.
    #[must_use]
    pub const fn timeline(&self) -> Timeline<'_> {
        Timeline::new(self)
    }

    /// Renders the timeline of the schedule, one line per task.
    #[must_use]
    pub fn render(&self) -> String {
        self.timeline().to_string()
    }

    /// Verifies that the schedule is valid.
    /// Every task is processed for exactly its processing time, never before its release,
    /// no two run segments overlap and the lateness equals the sum over the tasks.
    #[must_use]
    pub fn verify(&self) -> bool {
        if self.schedules.len() != self.instance.len() {
            return false;
        }

        let releases = self.instance.release_times();
        let processing = self.instance.processing_times();

        for (task, schedule) in self.schedules.iter().enumerate() {
            let intervals = schedule.intervals();

            if schedule.processed() != processing[task]
                || intervals.iter().any(|interval| interval.is_empty())
                || intervals.first().map_or(true, |first| first.start < releases[task])
                || intervals.windows(2).any(|pair| pair[0].end > pair[1].start)
            {
                return false;
            }
        }

        let mut all: Vec<_> = self.schedules.iter().flat_map(TaskSchedule::intervals).collect();
        all.sort_unstable_by_key(|interval| interval.start);
        if all.windows(2).any(|pair| pair[0].end > pair[1].start) {
            return false;
        }

        let lateness = (0..self.schedules.len()).filter_map(|task| self.task_lateness(task));
        lateness.sum::<Time>() == self.lateness
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn schedule(intervals: Vec<Vec<(Time, Time)>>, lateness: Time) -> anyhow::Result<Schedule> {
        let instance = Instance::new(2, vec![0, 1], vec![2, 2], vec![3, 4])?;
        let schedules = intervals
            .into_iter()
            .map(|task| TaskSchedule {
                intervals: task.into_iter().map(|(s, e)| Interval::new(s, e)).collect(),
            })
            .collect();
        Ok(Schedule::new(instance, schedules, lateness))
    }

    #[test]
    fn queries() -> anyhow::Result<()> {
        let schedule = schedule(vec![vec![(0, 1), (3, 4)], vec![(1, 3)]], 0)?;
        assert_eq!(schedule.completion_time(0), Some(4));
        assert_eq!(schedule.task_lateness(0), Some(1));
        assert_eq!(schedule.task_lateness(1), Some(-1));
        assert_eq!(schedule.task_lateness(2), None);
        assert_eq!(schedule.max_lateness(), Some(1));
        assert_eq!(schedule.schedules()[0].processed(), 2);
        assert!(schedule.verify());
        Ok(())
    }

    #[test]
    fn verify_detects_invalid_schedules() -> anyhow::Result<()> {
        // overlapping tasks
        assert!(!schedule(vec![vec![(0, 2)], vec![(1, 3)]], 0)?.verify());
        // before release
        assert!(!schedule(vec![vec![(0, 2)], vec![(0, 1), (2, 3)]], -2)?.verify());
        // not fully processed
        assert!(!schedule(vec![vec![(0, 1)], vec![(1, 3)]], -3)?.verify());
        // wrong lateness
        assert!(!schedule(vec![vec![(0, 2)], vec![(2, 4)]], 0)?.verify());
        assert!(schedule(vec![vec![(0, 2)], vec![(2, 4)]], -1)?.verify());
        Ok(())
    }
}
