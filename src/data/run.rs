use crate::core::{Scheduler, Time};
use crate::data::deserialize;
use anyhow::anyhow;
use std::fmt::{Display, Formatter, Result};
use std::fs::File;
use std::io::BufReader;

/// Lateness reached by one scheduler on every instance of a directory.
#[derive(Debug)]
pub struct Report {
    scheduler: &'static str,
    entries: Vec<ReportEntry>,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Scheduler: {}", self.scheduler)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f, "-------------------")
    }
}

/// Total and maximum lateness of one instance, with the time spent scheduling it.
#[derive(Debug)]
struct ReportEntry {
    name: String,
    lateness: Time,
    max_lateness: Time,
    seconds: f64,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: lateness {}, max {} in {:.2} sec",
            self.name, self.lateness, self.max_lateness, self.seconds
        )
    }
}

/// Schedules every instance of the `samples` directory and prints the report.
/// With `valid` set, each lateness must equal the one in the file name.
///
/// # Errors
/// - If a sample cannot be read or its name cannot be parsed.
/// - If the directory holds no samples.
///
/// # Panics
/// - If a schedule is invalid, or `valid` is set and a lateness differs from its label.
pub fn samples(valid: bool, solver: &mut dyn Scheduler) -> anyhow::Result<()> {
    let report = run("samples", valid, solver)?;
    if report.entries.is_empty() {
        return Err(anyhow!("No samples found"));
    }
    println!("{report}");
    Ok(())
}

/// Schedules every instance of `dir` with `solver`.
/// Instance files are named `<tasks>_<lateness>_<index>.json`, where `lateness` is the
/// total lateness of an optimal schedule. With `valid` set, the solver must reach it.
///
/// # Errors
/// - If a file cannot be read or its name cannot be parsed.
/// - If an instance does not hold the number of tasks its name announces.
///
/// # Panics
/// - If a schedule is invalid, or `valid` is set and a lateness differs from its label.
pub fn run(dir: &str, valid: bool, solver: &mut dyn Scheduler) -> anyhow::Result<Report> {
    let mut entries = Vec::new();

    for file in std::fs::read_dir(dir)? {
        let file = file?;
        let (name, tasks, expected) = parse_filename(&file.file_name())?;

        let instance: crate::core::Instance =
            deserialize(&mut BufReader::new(File::open(file.path())?))?;
        if instance.len() != tasks {
            return Err(anyhow!("{name} holds {} tasks", instance.len()));
        }

        let start = std::time::Instant::now();
        let schedule = solver.schedule(&instance);
        let seconds = start.elapsed().as_secs_f64();

        assert!(schedule.verify(), "Invalid schedule created for {name}");

        let lateness = schedule.lateness();
        if valid {
            assert_eq!(lateness, expected, "Invalid lateness {name}");
        }

        log::info!("{}: {name} scheduled in {seconds:.3} sec", solver.name());
        entries.push(ReportEntry {
            name,
            lateness,
            max_lateness: schedule.max_lateness().unwrap_or_default(),
            seconds,
        });
    }

    Ok(Report {
        scheduler: solver.name(),
        entries,
    })
}

fn parse_filename(filename: &std::ffi::OsString) -> anyhow::Result<(String, usize, Time)> {
    static NAME_ERR: &str = "Cannot read filename";

    let name = filename.to_str().ok_or_else(|| anyhow!(NAME_ERR))?;
    let mut parts = name.split('.');
    let mut parts = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.split('_');
    let tasks = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    let result = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    let _: usize = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    Ok((name.into(), tasks, result))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_filename() -> anyhow::Result<()> {
        let filename = "4_-15_0.json".into();
        let (name, tasks, result) = parse_filename(&filename)?;
        assert_eq!(name, "4_-15_0.json");
        assert_eq!(tasks, 4);
        assert_eq!(result, -15);

        let filename = "2_5_4.json".into();
        let (name, tasks, result) = parse_filename(&filename)?;
        assert_eq!(name, "2_5_4.json");
        assert_eq!(tasks, 2);
        assert_eq!(result, 5);
        Ok(())
    }

    #[test]
    fn report_lists_every_sample() -> anyhow::Result<()> {
        let report = run("samples", true, &mut crate::algo::Horn)?;
        let count = std::fs::read_dir("samples")?.count();
        assert_eq!(report.entries.len(), count);

        let text = report.to_string();
        assert!(text.starts_with("Scheduler: Horn\n"));
        assert!(text.contains("4_-15_0.json: lateness -15, max -2 in "));
        Ok(())
    }

    #[test]
    fn test_parse_filename_errors() {
        assert!(parse_filename(&"".into()).is_err());
        assert!(parse_filename(&".json".into()).is_err());
        assert!(parse_filename(&"10.json".into()).is_err());
        assert!(parse_filename(&"10_12.json".into()).is_err());
        assert!(parse_filename(&"10_1a2_0.json".into()).is_err());
        assert!(parse_filename(&"-1_12_0.json".into()).is_err());
        assert!(parse_filename(&"10_12_0a2.json".into()).is_err());
    }
}
