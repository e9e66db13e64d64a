//! Format command - print a version in canonical form.

use anyhow::Result;
use clap::Args;

use semver_lite::{parse_version, FormatError, Formatter};

use crate::config::SemverConfig;
use crate::exit_codes::ExitCode;
use crate::report_parse_error;

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Version to format
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Fail instead of printing more than N bytes (overrides semver.toml)
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,
}

pub fn execute(args: FormatArgs) -> Result<ExitCode> {
    let config = SemverConfig::load_from_cwd()?;
    Ok(format_with(&args, config.as_ref()))
}

/// Resolve the length limit (command line first, then config file) and print
fn format_with(args: &FormatArgs, config: Option<&SemverConfig>) -> ExitCode {
    let limit = args
        .max_len
        .or_else(|| config.and_then(|c| c.format.max_len));
    log::debug!("Output limit: {:?}", limit);

    let version = match parse_version(&args.version) {
        Ok(v) => v,
        Err(e) => return report_parse_error(&e),
    };

    match Formatter::new().max_len(limit).format(&version) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::Success
        }
        Err(e @ FormatError::BufferTooSmall { .. }) => {
            eprintln!("{}: {}", crate::PROG, e);
            ExitCode::OutputTooLong
        }
    }
}
