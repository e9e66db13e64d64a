//! Structured version representation

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version_parser::{is_space, parse_version, ParseError};

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
///
/// Equality is structural. Precedence (see [`Version::cmp_precedence`]) is not:
/// it ignores build metadata and compares numeric pre-release identifiers by
/// value, so `Version` has no `Ord` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: prerelease.map(str::to_string),
            build: build.map(str::to_string),
        }
    }

    /// Attach a pre-release label. An empty label is treated as absent.
    ///
    /// The label may not contain `+` or whitespace, since the formatted version
    /// would parse back with a different label.
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Result<Self, ParseError> {
        let prerelease = prerelease.into();
        if let Some(ch) = prerelease.chars().find(|&c| c == '+' || is_space(c)) {
            return Err(ParseError::InvalidPrerelease(ch));
        }
        self.prerelease = non_empty(prerelease);
        Ok(self)
    }

    /// Attach build metadata. An empty label is treated as absent.
    ///
    /// The label may not contain whitespace.
    pub fn with_build(mut self, build: impl Into<String>) -> Result<Self, ParseError> {
        let build = build.into();
        if let Some(ch) = build.chars().find(|&c| is_space(c)) {
            return Err(ParseError::InvalidBuildMetadata(ch));
        }
        self.build = non_empty(build);
        Ok(self)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release label without the leading `-`
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// The build metadata without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Check if this version carries a pre-release label
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Compare precedence with another version
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        crate::comparator::compare(self, other)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Names one of the three numeric fields of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Major,
    Minor,
    Patch,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Major => "major",
            Position::Minor => "minor",
            Position::Patch => "patch",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
