//! A single-operator comparison pattern such as `>=1.2.3`

use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::comparator::compare;
use crate::version::Version;
use crate::version_parser::{parse_pattern, ParseError};

/// An operator paired with the version it compares against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    operator: Operator,
    version: Version,
}

impl Pattern {
    pub fn new(operator: Operator, version: Version) -> Self {
        Pattern { operator, version }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if a version satisfies this pattern
    pub fn matches(&self, version: &Version) -> bool {
        self.operator.matches(compare(version, &self.version))
    }
}

/// Check if `version` satisfies `pattern`
pub fn matches(version: &Version, pattern: &Pattern) -> bool {
    pattern.matches(version)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}
