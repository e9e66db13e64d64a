//! Process exit codes for the `semver` binary.
//!
//! 0, 1 and 2 are the historical contract of the matcher: match, no match,
//! parse error. Everything else is specific to this binary.

/// Exit codes for semver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// VERSION matches PATTERN, or a subcommand succeeded
    Success = 0,

    /// VERSION does not match PATTERN
    NoMatch = 1,

    /// A version or pattern could not be parsed
    ParseError = 2,

    /// Malformed invocation (wrong arguments)
    Usage = 3,

    /// Formatted output exceeds the configured length limit
    OutputTooLong = 4,

    /// semver.toml could not be read or parsed
    ConfigError = 5,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Exit code for the outcome of a match
    pub fn from_match(matched: bool) -> Self {
        if matched {
            ExitCode::Success
        } else {
            ExitCode::NoMatch
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}
