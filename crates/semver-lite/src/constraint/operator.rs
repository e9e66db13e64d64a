//! Operator types for comparison patterns

use std::cmp::Ordering;
use std::fmt;

/// Comparison operators for version patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Equal (==)
    #[default]
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThanOrEqual => "<=",
            Operator::LessThan => "<",
            Operator::Equal => "==",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Check whether the result of comparing a candidate against the pattern
    /// version satisfies this operator
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::Equal => ordering == Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
