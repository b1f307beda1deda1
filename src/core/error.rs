use super::Time;
use std::fmt::{Display, Formatter};

/// Errors raised before a schedule is computed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The task arrays do not describe a valid instance.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The task cannot be finished in time even when run alone.
    #[error("infeasible task: release {release} + processing {processing} exceeds {kind} {limit}")]
    InfeasibleTask {
        release: Time,
        processing: Time,
        limit: Time,
        kind: Limit,
    },
}

/// Reasons for rejecting the task arrays of an instance.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("the number of tasks must be positive")]
    NoTasks,
    #[error("expected {expected} {field}, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("task {task} has negative release time {release}")]
    NegativeReleaseTime { task: usize, release: Time },
    #[error("task {task} has non-positive processing time {processing}")]
    NonPositiveProcessingTime { task: usize, processing: Time },
    #[error("times of task {task} overflow the schedule horizon")]
    TimeOverflow { task: usize },
}

/// Which bound an infeasible task exceeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Limit {
    DueDate,
    Deadline,
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DueDate => write!(f, "due date"),
            Self::Deadline => write!(f, "deadline"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_offending_task() {
        let err = Error::from(InvalidInput::NegativeReleaseTime {
            task: 3,
            release: -1,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: task 3 has negative release time -1"
        );

        let err = Error::InfeasibleTask {
            release: 2,
            processing: 4,
            limit: 5,
            kind: Limit::Deadline,
        };
        assert_eq!(
            err.to_string(),
            "infeasible task: release 2 + processing 4 exceeds deadline 5"
        );
    }
}
