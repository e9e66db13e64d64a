//! Sort command - print versions in precedence order.

use clap::Args;

use semver_lite::{parse_version, Semver};

use crate::exit_codes::ExitCode;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> ExitCode {
    for line in sorted(&args) {
        println!("{}", line);
    }
    ExitCode::Success
}

fn sorted(args: &SortArgs) -> Vec<String> {
    for version in &args.versions {
        if let Err(e) = parse_version(version) {
            log::warn!("Skipping {:?}: {}", version, e);
        }
    }

    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    }
}
