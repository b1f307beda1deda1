use clap::{Parser, ValueEnum};
use horn_scheduling::core::{Instance, Scheduler, Time};
use horn_scheduling::{algo, data, run_reader};
use rand::prelude::*;
use std::fs::File;
use std::io::{BufReader, Write};
use std::num::NonZero;

#[derive(Copy, Clone, Debug)]
struct Algorithm(usize, &'static str);

impl From<Algorithm> for Box<dyn Scheduler> {
    fn from(value: Algorithm) -> Box<dyn Scheduler> {
        algo::SCHEDULERS[value.0]()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.1)
    }
}

impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        static ALGORITHMS: std::sync::LazyLock<Vec<Algorithm>> = std::sync::LazyLock::new(|| {
            let iter = algo::SCHEDULERS.iter().enumerate();
            iter.map(|(i, init)| Algorithm(i, init().name())).collect()
        });

        ALGORITHMS.as_slice()
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.1))
    }
}

/// Application scheduling tasks with release times and due dates on one processor.
/// Logging is configured with the `RUST_LOG` environment variable.
#[derive(Debug, Parser)]
#[command(version, about)]
enum Application {
    /// Schedule the instance read from stdin with one of the implemented algorithms.
    Run { algorithm: Algorithm },
    /// Print the timeline of the schedule of an instance file.
    Render {
        algorithm: Algorithm,
        /// The instance file.
        input: String,
    },
    /// Run benchmarks on a set of instances.
    Bench {
        /// The input directory.
        input: String,
        /// Exclude scheduling algorithms.
        #[clap(short, long, value_delimiter = ',')]
        exclude: Vec<Algorithm>,
    },
    /// Generate instances, labelled with the lateness of the optimal schedule.
    Gen {
        /// The number of tasks.
        tasks: NonZero<usize>,
        /// The maximum processing time of a task.
        max_time: NonZero<u32>,
        /// The maximum release time of a task.
        #[clap(short = 'r', long, default_value = "20")]
        max_release: u32,
        /// The maximum gap between the earliest completion and the due date of a task.
        #[clap(short, long, default_value = "10")]
        slack: u32,
        /// Number of test cases to generate.
        #[clap(short, long, default_value = "1")]
        amount: NonZero<u64>,
        /// Seed of the generator. Random if not given.
        #[clap(long)]
        seed: Option<u64>,
        /// Path to output the generated instances. If the directory does not exist, it will be created.
        #[clap(short, long, default_value = "output")]
        output: String,
    },
}

fn schedulers(exclude: &[Algorithm]) -> impl Iterator<Item = Box<dyn Scheduler>> + '_ {
    let iter = algo::SCHEDULERS.iter().map(|init| init());
    iter.filter(|scheduler| !exclude.iter().any(|name| name.1 == scheduler.name()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Application::parse() {
        Application::Run { algorithm } => {
            let mut scheduler = Box::<dyn Scheduler>::from(algorithm);
            run_reader(scheduler.as_mut(), &mut std::io::stdin().lock())
        }
        Application::Render { algorithm, input } => {
            let mut scheduler = Box::<dyn Scheduler>::from(algorithm);
            let instance: Instance = data::deserialize(&mut BufReader::new(File::open(input)?))?;
            print!("{}", scheduler.schedule(&instance).timeline());
            Ok(())
        }
        Application::Bench { input, exclude } => {
            for mut scheduler in schedulers(&exclude) {
                let valid = scheduler.optimal();
                println!("{}", data::run(&input, valid, scheduler.as_mut())?);
            }
            Ok(())
        }
        Application::Gen {
            tasks,
            max_time,
            max_release,
            slack,
            amount,
            seed,
            output,
        } => {
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

            let output = std::path::Path::new(&output);
            if !output.try_exists()? {
                std::fs::create_dir_all(output)?;
            }

            for i in 0..amount.get() {
                let instance = data::random_instance(
                    &mut rng,
                    tasks.get(),
                    Time::from(max_time.get()),
                    Time::from(max_release),
                    Time::from(slack),
                )?;
                let lateness = algo::Horn.schedule(&instance).lateness();
                let filename = format!("{tasks}_{lateness}_{i}.json");
                log::info!("Generated {filename}");
                File::create(output.join(filename))?
                    .write_all(data::to_string(&instance)?.as_bytes())?;
            }
            Ok(())
        }
    }
}
