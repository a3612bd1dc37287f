#![forbid(unsafe_code)]

//! Version string parsing
//!
//! A version string must start with three dot-separated decimal groups.
//! Anything after them is accepted. The suffix is found by a separate scan of
//! the whole string for the first `-` followed by at least one character, so
//! trailing text without a hyphen (`1.2.3.4`) is discarded. Trailing
//! whitespace never counts as part of the suffix.

use crate::error::VersionError;
use crate::types::SemanticVersion;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)").expect("numeric prefix pattern is valid")
});

static SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)-.+$").expect("suffix pattern is valid"));

/// Parse version text into a `SemanticVersion`
///
/// # Errors
///
/// Returns `VersionError::Parse` carrying the input when it does not start
/// with `<digits>.<digits>.<digits>`, or when a group does not fit in `u64`.
pub fn parse_version(text: &str) -> Result<SemanticVersion, VersionError> {
    let parse_error = || VersionError::Parse {
        input: text.to_string(),
    };

    let captures = NUMERIC_PREFIX.captures(text).ok_or_else(parse_error)?;
    let component = |index: usize| -> Result<u64, VersionError> {
        captures[index].parse::<u64>().map_err(|_| parse_error())
    };

    let major = component(1)?;
    let minor = component(2)?;
    let patch = component(3)?;

    // Scans the full input, not just the text after the patch group.
    // Trailing line breaks and indentation belong to the document layout.
    let suffix = SUFFIX
        .find(text)
        .map(|m| m.as_str().trim_end())
        .filter(|suffix| suffix.len() > 1)
        .map(str::to_string);

    Ok(SemanticVersion {
        major,
        minor,
        patch,
        suffix,
    })
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}
