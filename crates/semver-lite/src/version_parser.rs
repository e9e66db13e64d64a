//! Version and pattern parsing
//!
//! The parser works on borrowed slices of the input and only allocates for the
//! pre-release and build labels it hands back inside the [`Version`].

use thiserror::Error;

use crate::constraint::{Operator, Pattern};
use crate::version::{Position, Version};

/// Error type for version and pattern parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '.' after the {0} version number")]
    MissingSeparator(Position),
    #[error("invalid character {ch:?} in the {pos} version number")]
    InvalidDigit { pos: Position, ch: char },
    #[error("the {0} version number is empty")]
    EmptyNumber(Position),
    #[error("the {0} version number does not fit in 64 bits")]
    Overflow(Position),
    #[error("empty pre-release label after '-'")]
    EmptyPrerelease,
    #[error("empty build metadata after '+'")]
    EmptyBuildMetadata,
    #[error("invalid character {0:?} in the pre-release label")]
    InvalidPrerelease(char),
    #[error("invalid character {0:?} in the build metadata")]
    InvalidBuildMetadata(char),
}

pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Parse a version string such as `1.2.3`, `v1.2.3-rc.1` or `=1.0.0+build.5`.
///
/// Leading spaces, tabs and newlines are skipped, and a single `=` followed by
/// a single `v` may precede the version. Parsing stops at the first whitespace
/// after the version; whatever follows is ignored.
pub fn parse_version(text: &str) -> Result<Version, ParseError> {
    let rest = skip_whitespace(text);
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    let rest = rest.strip_prefix('v').unwrap_or(rest);

    let token = match rest.find(is_space) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let (major, rest) = token
        .split_once('.')
        .ok_or(ParseError::MissingSeparator(Position::Major))?;
    let major = parse_number(major, Position::Major)?;

    let (minor, rest) = rest
        .split_once('.')
        .ok_or(ParseError::MissingSeparator(Position::Minor))?;
    let minor = parse_number(minor, Position::Minor)?;

    let (patch, labels) = match rest.find(|c: char| c == '-' || c == '+') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let patch = parse_number(patch, Position::Patch)?;

    let (prerelease, build) = split_labels(labels)?;

    Ok(Version::from_parts(major, minor, patch, prerelease, build))
}

/// Parse a comparison pattern such as `>=1.2.3` or `<2.0.0-beta`.
///
/// A pattern without an operator is an exact match.
pub fn parse_pattern(text: &str) -> Result<Pattern, ParseError> {
    let rest = skip_whitespace(text);

    let (operator, rest) = if let Some(r) = rest.strip_prefix("<=") {
        (Operator::LessThanOrEqual, r)
    } else if let Some(r) = rest.strip_prefix('<') {
        (Operator::LessThan, r)
    } else if let Some(r) = rest.strip_prefix(">=") {
        (Operator::GreaterThanOrEqual, r)
    } else if let Some(r) = rest.strip_prefix('>') {
        (Operator::GreaterThan, r)
    } else if let Some(r) = rest.strip_prefix('=') {
        (Operator::Equal, r)
    } else {
        (Operator::Equal, rest)
    };

    let version = parse_version(rest)?;
    Ok(Pattern::new(operator, version))
}

/// Split `-pre+build`, `-pre` or `+build` into its labels
fn split_labels(labels: &str) -> Result<(Option<&str>, Option<&str>), ParseError> {
    let (prerelease, build) = if let Some(body) = labels.strip_prefix('-') {
        match body.split_once('+') {
            Some((pre, build)) => (Some(pre), Some(build)),
            None => (Some(body), None),
        }
    } else if let Some(build) = labels.strip_prefix('+') {
        (None, Some(build))
    } else {
        (None, None)
    };

    if prerelease == Some("") {
        return Err(ParseError::EmptyPrerelease);
    }
    if build == Some("") {
        return Err(ParseError::EmptyBuildMetadata);
    }

    Ok((prerelease, build))
}

fn parse_number(field: &str, pos: Position) -> Result<u64, ParseError> {
    if field.is_empty() {
        return Err(ParseError::EmptyNumber(pos));
    }
    if let Some(ch) = field.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseError::InvalidDigit { pos, ch });
    }

    field
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
        .ok_or(ParseError::Overflow(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u64, minor: u64, patch: u64) -> Version {
        Version::new(major, minor, patch)
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_version("1.2.3").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("0.0.0").unwrap(), v(0, 0, 0));
        assert_eq!(parse_version("10.20.30").unwrap(), v(10, 20, 30));
        assert_eq!(parse_version("01.002.0003").unwrap(), v(1, 2, 3));
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(parse_version("v1.2.3").unwrap(), parse_version("1.2.3").unwrap());
        assert_eq!(parse_version("=1.2.3").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("=v1.2.3").unwrap(), v(1, 2, 3));

        // Only one of each, and only in that order
        assert_eq!(
            parse_version("v=1.2.3").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: '=' }
        );
        assert_eq!(
            parse_version("vv1.2.3").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: 'v' }
        );
        assert_eq!(
            parse_version("V1.2.3").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: 'V' }
        );
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_version(" \t\n1.2.3").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("1.2.3 ").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("1.2.3\n").unwrap(), v(1, 2, 3));
        assert_eq!(parse_version("1.2.3 trailing garbage").unwrap(), v(1, 2, 3));
        assert_eq!(
            parse_version("1.2.3-beta.2 whatever").unwrap(),
            v(1, 2, 3).with_prerelease("beta.2").unwrap()
        );
        assert_eq!(
            parse_version("1.2.3+b1 -x").unwrap(),
            v(1, 2, 3).with_build("b1").unwrap()
        );
    }

    #[test]
    fn test_parse_labels() {
        let parsed = parse_version("1.0.0-alpha.1").unwrap();
        assert_eq!(parsed.prerelease(), Some("alpha.1"));
        assert_eq!(parsed.build(), None);

        let parsed = parse_version("1.0.0-rc.1+build.5").unwrap();
        assert_eq!(parsed.prerelease(), Some("rc.1"));
        assert_eq!(parsed.build(), Some("build.5"));

        let parsed = parse_version("1.0.0+20130313144700").unwrap();
        assert_eq!(parsed.prerelease(), None);
        assert_eq!(parsed.build(), Some("20130313144700"));

        // Hyphens stay inside the pre-release, everything after the first '+' is build
        let parsed = parse_version("1.0.0-x-y-z.--+b+c-d").unwrap();
        assert_eq!(parsed.prerelease(), Some("x-y-z.--"));
        assert_eq!(parsed.build(), Some("b+c-d"));

        // Pre-release identifiers are not validated
        let parsed = parse_version("1.0.0-alpha..ü").unwrap();
        assert_eq!(parsed.prerelease(), Some("alpha..ü"));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(parse_version("").unwrap_err(), ParseError::MissingSeparator(Position::Major));
        assert_eq!(parse_version("abc").unwrap_err(), ParseError::MissingSeparator(Position::Major));
        assert_eq!(parse_version("1").unwrap_err(), ParseError::MissingSeparator(Position::Major));
        assert_eq!(parse_version("1.2").unwrap_err(), ParseError::MissingSeparator(Position::Minor));
        assert_eq!(
            parse_version("1 .2.3").unwrap_err(),
            ParseError::MissingSeparator(Position::Major)
        );
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            parse_version("1.x.0").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Minor, ch: 'x' }
        );
        assert_eq!(
            parse_version("a.1.0").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: 'a' }
        );
        assert_eq!(
            parse_version("1.2.3.4").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Patch, ch: '.' }
        );
        assert_eq!(
            parse_version("1.2.3beta").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Patch, ch: 'b' }
        );
        assert_eq!(
            parse_version("1.é.0").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Minor, ch: 'é' }
        );
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(parse_version(".1.2").unwrap_err(), ParseError::EmptyNumber(Position::Major));
        assert_eq!(parse_version("1..2").unwrap_err(), ParseError::EmptyNumber(Position::Minor));
        assert_eq!(parse_version("1.2.").unwrap_err(), ParseError::EmptyNumber(Position::Patch));
        assert_eq!(parse_version("1.2.-rc").unwrap_err(), ParseError::EmptyNumber(Position::Patch));
        assert_eq!(parse_version("1.2.3-").unwrap_err(), ParseError::EmptyPrerelease);
        assert_eq!(parse_version("1.2.3-+b").unwrap_err(), ParseError::EmptyPrerelease);
        assert_eq!(parse_version("1.2.3+").unwrap_err(), ParseError::EmptyBuildMetadata);
        assert_eq!(parse_version("1.2.3-rc+").unwrap_err(), ParseError::EmptyBuildMetadata);
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_version("18446744073709551615.0.0").unwrap(),
            v(u64::MAX, 0, 0)
        );
        assert_eq!(
            parse_version("18446744073709551616.0.0").unwrap_err(),
            ParseError::Overflow(Position::Major)
        );
        assert_eq!(
            parse_version("0.99999999999999999999.0").unwrap_err(),
            ParseError::Overflow(Position::Minor)
        );
        assert_eq!(
            parse_version("0.0.184467440737095516150").unwrap_err(),
            ParseError::Overflow(Position::Patch)
        );
    }

    #[test]
    fn test_parse_pattern_operators() {
        let cases = [
            ("<=1.2.3", Operator::LessThanOrEqual),
            ("<1.2.3", Operator::LessThan),
            ("==1.2.3", Operator::Equal),
            ("=1.2.3", Operator::Equal),
            ("1.2.3", Operator::Equal),
            (">1.2.3", Operator::GreaterThan),
            (">=1.2.3", Operator::GreaterThanOrEqual),
            ("  >= 1.2.3", Operator::GreaterThanOrEqual),
            ("\t<   v1.2.3", Operator::LessThan),
        ];

        for (input, expected) in cases {
            let pattern = parse_pattern(input).unwrap();
            assert_eq!(pattern.operator(), expected, "operator for {:?}", input);
            assert_eq!(pattern.version(), &v(1, 2, 3), "version for {:?}", input);
        }
    }

    #[test]
    fn test_parse_pattern_with_labels() {
        let pattern = parse_pattern(">=2.0.0-rc.1+meta").unwrap();
        assert_eq!(pattern.operator(), Operator::GreaterThanOrEqual);
        assert_eq!(pattern.version().prerelease(), Some("rc.1"));
        assert_eq!(pattern.version().build(), Some("meta"));
    }

    #[test]
    fn test_parse_pattern_fails() {
        assert_eq!(
            parse_pattern("!=1.2.3").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: '!' }
        );
        assert_eq!(
            parse_pattern("><1.2.3").unwrap_err(),
            ParseError::InvalidDigit { pos: Position::Major, ch: '<' }
        );
        assert_eq!(parse_pattern(">=").unwrap_err(), ParseError::MissingSeparator(Position::Major));
        assert_eq!(parse_pattern("^1.2.3").unwrap_err(), ParseError::InvalidDigit { pos: Position::Major, ch: '^' });
    }
}
