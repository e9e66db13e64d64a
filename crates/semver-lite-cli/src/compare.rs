//! Compare command - print the precedence of two versions as -1, 0 or 1.

use clap::Args;
use std::cmp::Ordering;

use semver_lite::compare_strings;

use crate::exit_codes::ExitCode;
use crate::report_parse_error;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version
    #[arg(value_name = "A")]
    pub a: String,

    /// Second version
    #[arg(value_name = "B")]
    pub b: String,
}

pub fn execute(args: CompareArgs) -> ExitCode {
    match compare_strings(&args.a, &args.b) {
        Ok(ordering) => {
            log::debug!("{} vs {}: {:?}", args.a, args.b, ordering);
            println!("{}", ordering_to_int(ordering));
            ExitCode::Success
        }
        Err(e) => report_parse_error(&e),
    }
}

fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
