use super::{Schedule, Time};
use std::fmt::{Display, Formatter, Result, Write};

const RUNNING: char = '▤';
const WAITING: char = '-';
const IDLE: char = ' ';

/// Textual timeline of a schedule.
/// One row per task and one column per time unit, up to the latest due date or completion.
#[derive(Clone, Copy, Debug)]
pub struct Timeline<'a> {
    schedule: &'a Schedule,
}

impl<'a> Timeline<'a> {
    pub(crate) const fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    fn horizon(&self) -> Time {
        let dues = self.schedule.instance().due_dates().iter().copied();
        let ends = self.schedule.schedules().iter().filter_map(|s| s.completion_time());
        dues.chain(ends).fold(0, Time::max)
    }

    fn symbol(&self, task: usize, time: Time) -> char {
        let instance = self.schedule.instance();

        if time < instance.release_times()[task] {
            IDLE
        } else if self.schedule.schedules()[task]
            .intervals()
            .iter()
            .any(|interval| interval.contains(time))
        {
            RUNNING
        } else if time > instance.due_dates()[task] {
            IDLE
        } else {
            WAITING
        }
    }
}

impl Display for Timeline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let horizon = self.horizon();

        for task in 0..self.schedule.schedules().len() {
            write!(f, "T{}: ", task + 1)?;
            for time in 0..horizon {
                f.write_char(self.symbol(task, time))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
