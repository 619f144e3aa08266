//! Semantic version values and inclusive version ranges.
//!
//! [`Version`] is a plain `(major, minor, patch)` triple with a derived
//! total order. Parsing delegates to the `semver` crate and then drops
//! pre-release and build-metadata suffixes: Flutter and Patrol releases
//! never use them to distinguish toolchain compatibility, so ordering
//! here is purely numeric.

use crate::error::{PrepError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A `const`-compatible three-component version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string.
    ///
    /// Accepts an optional `v` prefix and tolerates pre-release/build
    /// suffixes (`3.24.0-beta.1` parses as `3.24.0`). Fails with
    /// [`PrepError::InvalidVersionFormat`] when the input is not a dotted
    /// numeric triple.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let parsed =
            semver::Version::parse(bare).map_err(|e| PrepError::InvalidVersionFormat {
                input: input.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Major component.
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Minor component.
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch component.
    pub const fn patch(&self) -> u64 {
        self.patch
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An inclusive version range: both bounds are themselves members.
///
/// Table data is compiled in with `min <= max`; the invariant is checked
/// by the table sanity test rather than at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Version,
    pub max: Version,
}

impl VersionRange {
    /// Create a range from its inclusive bounds.
    pub const fn new(min: Version, max: Version) -> Self {
        Self { min, max }
    }

    /// Whether `version` lies within the range, bounds included.
    pub fn contains(&self, version: Version) -> bool {
        self.min <= version && version <= self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

impl Serialize for VersionRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("VersionRange", 2)?;
        s.serialize_field("min", &self.min)?;
        s.serialize_field("max", &self.max)?;
        s.end()
    }
}
