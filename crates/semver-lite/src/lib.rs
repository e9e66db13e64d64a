//! Semantic version parsing, comparison and pattern matching
//!
//! Versions look like `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`; patterns are a
//! single comparison operator followed by a version, e.g. `>=1.2.3`.
//!
//! ```
//! use semver_lite::{matches_strings, parse_version, compare};
//! use std::cmp::Ordering;
//!
//! assert_eq!(matches_strings("1.2.4", ">=1.2.3"), Ok(true));
//!
//! let release = parse_version("1.0.0").unwrap();
//! let rc = parse_version("1.0.0-rc.1").unwrap();
//! assert_eq!(compare(&release, &rc), Ordering::Greater);
//! ```

pub mod constraint;
mod comparator;
mod formatter;
mod semver;
mod version;
mod version_parser;

pub use comparator::{compare, Comparator};
pub use constraint::{matches, Operator, Pattern};
pub use formatter::{format, FormatError, Formatter};
pub use semver::{compare_strings, matches_strings, Semver};
pub use version::{Position, Version};
pub use version_parser::{parse_pattern, parse_version, ParseError};
