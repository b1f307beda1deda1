use super::{Error, InvalidInput, Limit};
use serde::{Deserialize, Serialize};

/// A point in time or a duration.
pub type Time = i64;

/// A task. Contains the release time, processing time, due date and an optional hard deadline.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Task {
    release: Time,
    processing: Time,
    due: Time,
    deadline: Option<Time>,
}

impl Task {
    /// Creates a new task without a hard deadline.
    ///
    /// # Errors
    /// - If the task cannot finish by its due date when started at its release time.
    pub fn new(release: Time, processing: Time, due: Time) -> Result<Self, Error> {
        Self::check(release, processing, due, Limit::DueDate)?;
        Ok(Self {
            release,
            processing,
            due,
            deadline: None,
        })
    }

    /// Creates a new task with a hard deadline.
    ///
    /// # Errors
    /// - If the task cannot finish by its due date or its deadline when started at its release time.
    pub fn with_deadline(
        release: Time,
        processing: Time,
        due: Time,
        deadline: Time,
    ) -> Result<Self, Error> {
        Self::check(release, processing, deadline, Limit::Deadline)?;
        let task = Self::new(release, processing, due)?;
        Ok(Self {
            deadline: Some(deadline),
            ..task
        })
    }

    fn check(release: Time, processing: Time, limit: Time, kind: Limit) -> Result<(), Error> {
        if release.checked_add(processing).map_or(true, |end| end > limit) {
            return Err(Error::InfeasibleTask {
                release,
                processing,
                limit,
                kind,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn release(&self) -> Time {
        self.release
    }

    #[must_use]
    pub const fn processing(&self) -> Time {
        self.processing
    }

    #[must_use]
    pub const fn due(&self) -> Time {
        self.due
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Time> {
        self.deadline
    }
}

/// Unvalidated task arrays, as read from a file.
#[derive(Deserialize)]
struct RawInstance {
    release_times: Vec<Time>,
    processing_times: Vec<Time>,
    due_dates: Vec<Time>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self, Error> {
        let tasks = raw.release_times.len();
        Self::new(tasks, raw.release_times, raw.processing_times, raw.due_dates)
    }
}

/// An instance of the scheduling problem.
/// Task attributes are stored in parallel arrays indexed by task id.
#[derive(Clone, Debug, Deserialize, Eq, Serialize, PartialEq)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    release_times: Vec<Time>,
    processing_times: Vec<Time>,
    due_dates: Vec<Time>,
}

impl Instance {
    /// Creates a new instance from task arrays aligned by index.
    ///
    /// # Errors
    /// - If `number_of_tasks` is zero.
    /// - If any array length differs from `number_of_tasks`.
    /// - If a release time is negative or a processing time is not positive.
    /// - If a completion time or the total lateness may not fit in [`Time`].
    pub fn new(
        number_of_tasks: usize,
        release_times: Vec<Time>,
        processing_times: Vec<Time>,
        due_dates: Vec<Time>,
    ) -> Result<Self, Error> {
        if number_of_tasks == 0 {
            return Err(InvalidInput::NoTasks.into());
        }

        for (field, actual) in [
            ("release times", release_times.len()),
            ("processing times", processing_times.len()),
            ("due dates", due_dates.len()),
        ] {
            if actual != number_of_tasks {
                return Err(InvalidInput::LengthMismatch {
                    field,
                    expected: number_of_tasks,
                    actual,
                }
                .into());
            }
        }

        if let Some((task, &release)) = release_times.iter().enumerate().find(|&(_, &r)| r < 0) {
            return Err(InvalidInput::NegativeReleaseTime { task, release }.into());
        }

        let non_positive = processing_times.iter().enumerate().find(|&(_, &p)| p <= 0);
        if let Some((task, &processing)) = non_positive {
            return Err(InvalidInput::NonPositiveProcessingTime { task, processing }.into());
        }

        check_horizon(&release_times, &processing_times, &due_dates)?;

        Ok(Self {
            release_times,
            processing_times,
            due_dates,
        })
    }

    /// Creates a new instance from already checked tasks.
    ///
    /// # Errors
    /// - If `tasks` is empty, has a negative release time or a non-positive processing time.
    pub fn from_tasks(tasks: &[Task]) -> Result<Self, Error> {
        Self::new(
            tasks.len(),
            tasks.iter().map(Task::release).collect(),
            tasks.iter().map(Task::processing).collect(),
            tasks.iter().map(Task::due).collect(),
        )
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.release_times.len()
    }

    /// Pairs with `len`. A valid instance has at least one task, so this is false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.release_times.is_empty()
    }

    #[must_use]
    pub fn release_times(&self) -> &[Time] {
        &self.release_times
    }

    #[must_use]
    pub fn processing_times(&self) -> &[Time] {
        &self.processing_times
    }

    #[must_use]
    pub fn due_dates(&self) -> &[Time] {
        &self.due_dates
    }
}

/// Checks that every time computed while scheduling fits in [`Time`].
/// No task completes after the latest release plus the total processing time,
/// nor before its own release plus processing time, which bounds the lateness of every task.
fn check_horizon(
    releases: &[Time],
    processing: &[Time],
    dues: &[Time],
) -> Result<(), InvalidInput> {
    let overflow = |task| InvalidInput::TimeOverflow { task };

    let mut horizon = releases.iter().copied().max().unwrap_or_default();
    for (task, &time) in processing.iter().enumerate() {
        horizon = horizon.checked_add(time).ok_or_else(|| overflow(task))?;
    }

    let mut lateness: Time = 0;
    for (task, &due) in dues.iter().enumerate() {
        let earliest = releases[task] + processing[task];
        let early = earliest.checked_sub(due).ok_or_else(|| overflow(task))?;
        let late = horizon.checked_sub(due).ok_or_else(|| overflow(task))?;
        let bound = early.abs().max(late.abs());
        lateness = lateness.checked_add(bound).ok_or_else(|| overflow(task))?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn instance_should_serialize() -> anyhow::Result<()> {
        let instance = Instance::new(2, vec![0, 4], vec![3, 2], vec![13, 8])?;

        let serialized = crate::data::to_string(&instance)?;
        let mut reader = std::io::Cursor::new(serialized);
        let deserialized: Instance = crate::data::deserialize(&mut reader)?;

        assert_eq!(instance, deserialized);

        Ok(())
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"release_times":[0,-1],"processing_times":[1,1],"due_dates":[2,2]}"#;
        let mut reader = std::io::Cursor::new(json);
        assert!(crate::data::deserialize::<Instance>(&mut reader).is_err());
    }

    #[test]
    fn invalid_instances_are_rejected() {
        assert_eq!(
            Instance::new(0, vec![], vec![], vec![]),
            Err(InvalidInput::NoTasks.into())
        );
        assert_eq!(
            Instance::new(2, vec![0, 0], vec![1], vec![1, 1]),
            Err(InvalidInput::LengthMismatch {
                field: "processing times",
                expected: 2,
                actual: 1,
            }
            .into())
        );
        assert_eq!(
            Instance::new(2, vec![0, -3], vec![1, 1], vec![1, 1]),
            Err(InvalidInput::NegativeReleaseTime {
                task: 1,
                release: -3
            }
            .into())
        );
        assert_eq!(
            Instance::new(1, vec![0], vec![0], vec![1]),
            Err(InvalidInput::NonPositiveProcessingTime {
                task: 0,
                processing: 0
            }
            .into())
        );
    }

    #[test]
    fn times_beyond_the_horizon_are_rejected() {
        assert_eq!(
            Instance::new(1, vec![Time::MAX - 1], vec![5], vec![Time::MAX]),
            Err(InvalidInput::TimeOverflow { task: 0 }.into())
        );
        assert_eq!(
            Instance::new(3, vec![0, 0, 0], vec![1, Time::MAX, 1], vec![1, 1, 1]),
            Err(InvalidInput::TimeOverflow { task: 1 }.into())
        );
        assert_eq!(
            Instance::new(2, vec![0, 0], vec![1, 1], vec![0, Time::MIN]),
            Err(InvalidInput::TimeOverflow { task: 1 }.into())
        );
        assert_eq!(
            Instance::new(2, vec![0, 0], vec![1, 1], vec![Time::MIN / 2; 2]),
            Err(InvalidInput::TimeOverflow { task: 1 }.into())
        );
        assert!(Instance::new(1, vec![Time::MAX - 5], vec![5], vec![Time::MAX]).is_ok());
    }

    #[test]
    fn infeasible_tasks_are_rejected() {
        assert!(Task::new(0, 5, 5).is_ok());
        assert!(matches!(
            Task::new(1, 5, 5),
            Err(Error::InfeasibleTask {
                kind: Limit::DueDate,
                ..
            })
        ));
        assert!(matches!(
            Task::with_deadline(0, 5, 9, 4),
            Err(Error::InfeasibleTask {
                kind: Limit::Deadline,
                limit: 4,
                ..
            })
        ));
        assert!(matches!(
            Task::new(Time::MAX, 1, Time::MAX),
            Err(Error::InfeasibleTask { .. })
        ));
        assert_eq!(
            Task::with_deadline(0, 5, 9, 6).map(|task| task.deadline()),
            Ok(Some(6))
        );
    }

    #[test]
    fn instance_from_tasks() -> anyhow::Result<()> {
        let tasks = [Task::new(0, 3, 13)?, Task::new(4, 2, 8)?];
        let instance = Instance::from_tasks(&tasks)?;
        assert_eq!(instance.release_times(), [0, 4]);
        assert_eq!(instance.processing_times(), [3, 2]);
        assert_eq!(instance.due_dates(), [13, 8]);
        assert_eq!(instance.len(), 2);
        assert!(!instance.is_empty());
        assert!(Instance::from_tasks(&[]).is_err());
        Ok(())
    }
}
