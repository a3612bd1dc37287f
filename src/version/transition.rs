#![forbid(unsafe_code)]

//! Bump transitions between versions

use crate::error::VersionError;
use crate::types::{BumpLevel, SemanticVersion};

/// Compute the version that follows `current`
///
/// | level | major | minor | patch |
/// |-------|-------|-------|-------|
/// | Major | +1    | 0     | 0     |
/// | Minor | =     | +1    | 0     |
/// | Patch | =     | =     | +1    |
/// | None  | =     | =     | =     |
///
/// The suffix is carried over when `keep_suffix` is true and dropped
/// otherwise, whatever the level.
///
/// # Errors
///
/// Returns `VersionError::Overflow` when the bumped component is already
/// `u64::MAX`.
pub fn next_version(
    current: &SemanticVersion,
    level: Option<BumpLevel>,
    keep_suffix: bool,
) -> Result<SemanticVersion, VersionError> {
    let mut next = current.clone();

    match level {
        Some(BumpLevel::Major) => {
            next.major = increment("major", current.major)?;
            next.minor = 0;
            next.patch = 0;
        }
        Some(BumpLevel::Minor) => {
            next.minor = increment("minor", current.minor)?;
            next.patch = 0;
        }
        Some(BumpLevel::Patch) => {
            next.patch = increment("patch", current.patch)?;
        }
        None => {}
    }

    if !keep_suffix {
        next.suffix = None;
    }

    Ok(next)
}

fn increment(component: &'static str, value: u64) -> Result<u64, VersionError> {
    value
        .checked_add(1)
        .ok_or(VersionError::Overflow { component, value })
}

impl SemanticVersion {
    /// Method form of [`next_version`]
    pub fn next(
        &self,
        level: Option<BumpLevel>,
        keep_suffix: bool,
    ) -> Result<SemanticVersion, VersionError> {
        next_version(self, level, keep_suffix)
    }
}
