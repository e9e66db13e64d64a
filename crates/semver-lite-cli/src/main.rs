mod compare;
mod config;
mod exit_codes;
mod format;
mod sort;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use console::style;
use log::LevelFilter;

use semver_lite::{parse_pattern, parse_version, ParseError};

use exit_codes::ExitCode;

const PROG: &str = env!("CARGO_BIN_NAME");

#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Match a semantic version against a comparison pattern")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Exits with 0 if VERSION matches PATTERN, 1 if it does not and 2 if either fails to parse.")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Version to test, e.g. 1.2.3-rc.1
    #[arg(value_name = "VERSION", requires = "pattern")]
    candidate: Option<String>,

    /// Pattern to test against, e.g. ">=1.2.0"
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print -1, 0 or 1 as A sorts before, equal to or after B
    Compare(compare::CompareArgs),

    /// Print a version in canonical form
    Format(format::FormatArgs),

    /// Print versions in precedence order
    Sort(sort::SortArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Print a parse failure the way the matcher always has and pick its exit code
pub(crate) fn report_parse_error(err: &ParseError) -> ExitCode {
    eprintln!("{}: Error parsing version or pattern: {}", PROG, err);
    ExitCode::ParseError
}

fn run_match(version: &str, pattern: &str) -> ExitCode {
    let version = match parse_version(version) {
        Ok(v) => v,
        Err(e) => return report_parse_error(&e),
    };
    let pattern = match parse_pattern(pattern) {
        Ok(p) => p,
        Err(e) => return report_parse_error(&e),
    };

    let matched = pattern.matches(&version);
    log::debug!("{} {} {}: {}", version, pattern.operator(), pattern.version(), matched);
    ExitCode::from_match(matched)
}

fn run() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            });
        }
    };

    init_logging(args.verbose);

    match (args.command, args.candidate, args.pattern) {
        (Some(Commands::Compare(compare_args)), _, _) => Ok(compare::execute(compare_args)),
        (Some(Commands::Format(format_args)), _, _) => format::execute(format_args),
        (Some(Commands::Sort(sort_args)), _, _) => Ok(sort::execute(sort_args)),
        (None, Some(version), Some(pattern)) => Ok(run_match(&version, &pattern)),
        _ => {
            eprintln!("Usage: {} <VERSION> <PATTERN>", PROG);
            eprintln!("Returns 0 if VERSION matches PATTERN or 1 otherwise");
            eprintln!("In the event of a parse error, 2 is returned");
            eprintln!();
            eprintln!("Run '{} --help' for more options.", PROG);
            Ok(ExitCode::Usage)
        }
    }
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::ConfigError.into()
        }
    }
}
