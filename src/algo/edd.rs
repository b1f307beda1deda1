use crate::core::{Instance, PriorityOrdering, Schedule, ScheduleBuilder, Scheduler};

/// Non-preemptive earliest due date list scheduling.
/// Whenever the processor is free, the released task with the earliest due date runs to completion.
pub(super) fn schedule(instance: &Instance) -> ScheduleBuilder {
    let mut schedule = ScheduleBuilder::new(instance);
    let mut releases = schedule.new_release_ordering();
    let mut pending = PriorityOrdering::with_capacity(instance.len());
    let mut time = 0;

    while !pending.is_empty() || !releases.is_empty() {
        if pending.is_empty() {
            time = releases.peek_min_key().map_or(time, |release| release.max(time));
        }

        schedule.release(time, &mut releases, &mut pending);

        let Some(task) = pending.extract_min() else {
            unreachable!("A task is always released after idling");
        };

        let end = time + schedule.remaining(task);
        schedule.run(task, time, end);
        time = end;
    }

    schedule
}

/// Non-preemptive earliest due date list scheduling.
#[derive(Clone, Debug, Default)]
pub struct Edd;

impl Scheduler for Edd {
    fn schedule(&mut self, instance: &Instance) -> Schedule {
        schedule(instance).into()
    }

    fn name(&self) -> &'static str {
        "EDD"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SCHEDULERS)]
static INSTANCE: fn() -> Box<dyn Scheduler> = || Box::new(Edd);

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::Horn;
    use crate::data::{random_instance, samples};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_edd() {
        assert!(samples(false, &mut Edd).is_ok());
    }

    #[test]
    fn never_preempts() -> anyhow::Result<()> {
        let instance = Instance::new(4, vec![0, 4, 2, 0], vec![3, 2, 3, 4], vec![13, 8, 11, 16])?;
        let schedule = Edd.schedule(&instance);

        assert!(schedule.verify());
        assert!(schedule
            .schedules()
            .iter()
            .all(|task| task.intervals().len() == 1));
        // T1 [0,3), T3 [3,6), T2 [6,8), T4 [8,12)
        assert_eq!(schedule.lateness(), -10 - 5 + 0 - 4);
        Ok(())
    }

    #[test]
    fn horn_is_never_worse() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let tasks = rng.gen_range(1..=10);
            let instance = random_instance(&mut rng, tasks, 8, 15, 6)?;
            let edd = Edd.schedule(&instance);
            let horn = Horn.schedule(&instance);

            assert!(edd.verify(), "Invalid schedule {edd:?}");
            assert!(horn.max_lateness() <= edd.max_lateness());
        }
        Ok(())
    }
}
