//! Semver facade providing high-level string operations

use std::cmp::Ordering;

use crate::comparator::compare;
use crate::version::Version;
use crate::version_parser::{parse_pattern, parse_version, ParseError};

/// Parse two version strings and compare them
pub fn compare_strings(a: &str, b: &str) -> Result<Ordering, ParseError> {
    let a = parse_version(a)?;
    let b = parse_version(b)?;
    Ok(compare(&a, &b))
}

/// Parse a version and a pattern and check whether the version matches
pub fn matches_strings(version: &str, pattern: &str) -> Result<bool, ParseError> {
    let version = parse_version(version)?;
    let pattern = parse_pattern(pattern)?;
    Ok(pattern.matches(&version))
}

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a pattern. Unparsable input never does.
    pub fn satisfies(version: &str, pattern: &str) -> bool {
        matches_strings(version, pattern).unwrap_or(false)
    }

    /// Return all versions that satisfy the given pattern
    pub fn satisfied_by(versions: &[&str], pattern: &str) -> Vec<String> {
        let pattern = match parse_pattern(pattern) {
            Ok(p) => p,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter_map(|v| {
                let parsed = parse_version(v).ok()?;
                if pattern.matches(&parsed) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Keep the original index so equal precedence preserves input order
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parse_version(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
