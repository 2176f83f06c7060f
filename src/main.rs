//! `cpusched` — run one dispatch policy over a workload and print the result.
//!
//! The workload comes from comma-separated lists, a JSON file, or a seeded
//! random generator:
//!
//! ```text
//! cpusched -a FCFS --arrival 0,1,2 --service 4,3,1
//! cpusched -a RR -q 2 --workload jobs.json --json
//! cpusched -a Priority-P --random 6 --seed 42
//! ```

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use u_cpusched::generator::{generate, WorkloadConfig};
use u_cpusched::models::{Policy, PolicyKind, SimulationResult, Workload};
use u_cpusched::scheduler;
use u_cpusched::validation::{parse_list, resolve_policy, ValidationError, ValidationErrorKind};

fn cli() -> Command {
    Command::new("cpusched")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Single-core CPU dispatch simulator")
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .required(true)
                .help("FCFS, SJF-NP, SJF-P, Priority-NP, Priority-P or RR"),
        )
        .arg(
            Arg::new("arrival")
                .long("arrival")
                .value_name("CSV")
                .requires("service")
                .help("Arrival times, comma-separated"),
        )
        .arg(
            Arg::new("service")
                .long("service")
                .value_name("CSV")
                .requires("arrival")
                .help("Service (burst) times, comma-separated"),
        )
        .arg(
            Arg::new("priorities")
                .short('p')
                .long("priorities")
                .value_name("CSV")
                .help("Priorities for the priority policies (lower = more urgent)"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .value_parser(value_parser!(i64))
                .help("Time slice for RR"),
        )
        .arg(
            Arg::new("workload")
                .short('w')
                .long("workload")
                .value_name("FILE")
                .conflicts_with_all(["arrival", "random"])
                .help("JSON workload file"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .conflicts_with("arrival")
                .help("Generate N random processes"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .default_value("0")
                .help("Seed for --random"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the full result as JSON"),
        )
}

fn load_workload(matches: &ArgMatches) -> Result<Workload, Box<dyn Error>> {
    if let Some(path) = matches.get_one::<String>("workload") {
        let text = fs::read_to_string(path).map_err(|e| {
            ValidationError::new(ValidationErrorKind::MalformedInput, format!("{path}: {e}"))
        })?;
        let workload: Workload = serde_json::from_str(&text).map_err(|e| {
            ValidationError::new(ValidationErrorKind::MalformedInput, format!("{path}: {e}"))
        })?;
        return Ok(workload);
    }

    if let Some(&count) = matches.get_one::<usize>("random") {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);
        let config = WorkloadConfig::new().with_process_count(count);
        info!("generating {count} processes with seed {seed}");
        return Ok(generate(&config, &mut SmallRng::seed_from_u64(seed)));
    }

    match (
        matches.get_one::<String>("arrival"),
        matches.get_one::<String>("service"),
    ) {
        (Some(arrival), Some(service)) => Ok(Workload::from_arrays(
            parse_list("arrival", arrival)?,
            parse_list("service", service)?,
        )),
        _ => Err(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "No workload given: use --arrival/--service, --workload or --random",
        )
        .into()),
    }
}

/// Resolves the workload and the policy from the command line.
///
/// `--priorities` overrides priorities carried by a workload file.
fn prepare(matches: &ArgMatches) -> Result<(Workload, Policy), Box<dyn Error>> {
    let kind: PolicyKind = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()?;

    let mut workload = load_workload(matches)?;
    if let Some(list) = matches.get_one::<String>("priorities") {
        workload.priorities = Some(parse_list("priorities", list)?);
    }

    let policy = resolve_policy(
        kind,
        workload.priorities.clone(),
        matches.get_one::<i64>("quantum").copied(),
    )?;
    Ok((workload, policy))
}

fn render(matches: &ArgMatches, result: &SimulationResult) -> Result<String, Box<dyn Error>> {
    if matches.get_flag("json") {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.report())
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let (workload, policy) = prepare(matches)?;

    info!("running {policy} over {} processes", workload.len());
    let result = match scheduler::run(&workload, &policy) {
        Ok(result) => result,
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            return Ok(ExitCode::from(2));
        }
    };

    println!("{}", render(matches, &result)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli().get_matches();
    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
