//! Rendering versions back to text

use thiserror::Error;

use crate::version::Version;

/// Error type for version formatting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("formatted version needs {needed} bytes but the limit is {limit}")]
    BufferTooSmall { needed: usize, limit: usize },
}

/// Formats versions as `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, optionally
/// refusing output longer than a fixed limit.
///
/// Output over the limit is an error, never truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    max_len: Option<usize>,
}

impl Formatter {
    /// Limit matching the historical fixed 255-byte output buffer, which held
    /// 254 characters plus a terminator.
    pub const LEGACY_MAX_LEN: usize = 254;

    /// Create an unbounded formatter
    pub fn new() -> Self {
        Formatter { max_len: None }
    }

    /// Reject output longer than `max_len` bytes; `None` removes the limit
    pub fn max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.max_len
    }

    pub fn format(&self, version: &Version) -> Result<String, FormatError> {
        let out = version.to_string();
        match self.max_len {
            Some(limit) if out.len() > limit => Err(FormatError::BufferTooSmall {
                needed: out.len(),
                limit,
            }),
            _ => Ok(out),
        }
    }
}

/// Format a version with no length limit
pub fn format(version: &Version) -> Result<String, FormatError> {
    Formatter::new().format(version)
}
