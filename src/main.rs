use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use u_procsim::loader::load_processes;
use u_procsim::report::write_schedule;
use u_procsim::simulation::Simulation;
use u_procsim::workload::{generate, WorkloadConfig};

const USAGE: &str = "usage: u-procsim [-v|-vv] <file.csv>\n       u-procsim [-v|-vv] --random <count> [--seed <n>]";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

enum Source {
    File(String),
    Random { count: usize, seed: u64 },
}

struct Args {
    source: Source,
    verbosity: u8,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut verbosity: u8 = 0;
    let mut file: Option<String> = None;
    let mut count: Option<usize> = None;
    let mut seed: u64 = 0;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" => verbosity = verbosity.max(1),
            "-vv" => verbosity = 2,
            "--random" => {
                let value = iter.next().ok_or("--random needs a count")?;
                count = Some(value.parse().map_err(|_| format!("invalid count '{value}'"))?);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = value.parse().map_err(|_| format!("invalid seed '{value}'"))?;
            }
            other if other.starts_with('-') => return Err(format!("unknown option '{other}'")),
            other => {
                if file.replace(other.to_string()).is_some() {
                    return Err("only one scheduling file may be given".to_string());
                }
            }
        }
    }

    let source = match (file, count) {
        (Some(path), None) => Source::File(path),
        (None, Some(count)) => Source::Random { count, seed },
        (Some(_), Some(_)) => return Err("give either a file or --random, not both".to_string()),
        (None, None) => return Err("must give a scheduling file to process".to_string()),
    };
    Ok(Args { source, verbosity })
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => env::var("U_PROCSIM_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    init_logging(args.verbosity);

    let processes = match args.source {
        Source::File(path) => match load_processes(&path) {
            Ok(processes) => processes,
            Err(e) => {
                eprintln!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        Source::Random { count, seed } => {
            generate(&WorkloadConfig::default().with_count(count).with_seed(seed))
        }
    };

    let schedules = match Simulation::standard(processes).run() {
        Ok(schedules) => schedules,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for schedule in &schedules {
        if let Err(e) = write_schedule(&mut out, schedule).and_then(|_| writeln!(out)) {
            eprintln!("error writing report: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file() {
        let parsed = parse_args(&args(&["-v", "batch.csv"])).unwrap();
        assert_eq!(parsed.verbosity, 1);
        assert!(matches!(parsed.source, Source::File(ref p) if p == "batch.csv"));
    }

    #[test]
    fn test_parse_random() {
        let parsed = parse_args(&args(&["--random", "12", "--seed", "7", "-vv"])).unwrap();
        assert_eq!(parsed.verbosity, 2);
        assert!(matches!(parsed.source, Source::Random { count: 12, seed: 7 }));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["a.csv", "b.csv"])).is_err());
        assert!(parse_args(&args(&["--random"])).is_err());
        assert!(parse_args(&args(&["--random", "x"])).is_err());
        assert!(parse_args(&args(&["a.csv", "--random", "3"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
