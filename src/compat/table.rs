//! The Patrol / Flutter compatibility table.
//!
//! One row per supported toolchain pairing: an inclusive Patrol CLI
//! range, an inclusive `patrol` package range, and the Flutter release
//! requirement for that pairing. Rows are declared newest to oldest for
//! readability; matching is independent per row, so order carries no
//! semantic weight.

use crate::version::{Version, VersionRange};
use serde::Serialize;
use std::fmt;

/// Flutter requirement attached to a table entry.
///
/// Recent toolchain pairings are validated against a single Flutter
/// release and pin it exactly; older pairings only state the minimum
/// release they were introduced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRequirement {
    /// Exactly this Flutter release.
    Exact(Version),
    /// This Flutter release or any later one.
    AtLeast(Version),
}

impl HostRequirement {
    /// Whether the given Flutter version satisfies this requirement.
    pub fn accepts(&self, flutter: Version) -> bool {
        match self {
            Self::Exact(required) => flutter == *required,
            Self::AtLeast(minimum) => flutter >= *minimum,
        }
    }
}

impl fmt::Display for HostRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(version) => write!(f, "= {}", version),
            Self::AtLeast(version) => write!(f, ">= {}", version),
        }
    }
}

/// One row of the compatibility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    /// Supported Patrol CLI versions, inclusive.
    pub cli: VersionRange,
    /// Supported `patrol` package versions, inclusive.
    pub patrol: VersionRange,
    /// Flutter requirement for this pairing.
    pub flutter: HostRequirement,
}

const fn ver(major: u64, minor: u64, patch: u64) -> Version {
    Version::new(major, minor, patch)
}

const fn range(min: Version, max: Version) -> VersionRange {
    VersionRange::new(min, max)
}

/// Supported toolchain pairings, newest first.
pub const COMPATIBILITY_TABLE: &[CompatibilityEntry] = &[
    CompatibilityEntry {
        cli: range(ver(4, 0, 0), ver(4, 0, 1)),
        patrol: range(ver(4, 0, 0), ver(4, 0, 0)),
        flutter: HostRequirement::Exact(ver(3, 32, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 11, 0), ver(3, 11, 0)),
        patrol: range(ver(3, 20, 0), ver(3, 20, 0)),
        flutter: HostRequirement::Exact(ver(3, 32, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 9, 0), ver(3, 10, 0)),
        patrol: range(ver(3, 18, 0), ver(3, 19, 0)),
        flutter: HostRequirement::Exact(ver(3, 32, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 7, 0), ver(3, 8, 0)),
        patrol: range(ver(3, 16, 0), ver(3, 17, 0)),
        flutter: HostRequirement::Exact(ver(3, 32, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 5, 0), ver(3, 6, 0)),
        patrol: range(ver(3, 14, 0), ver(3, 15, 2)),
        flutter: HostRequirement::AtLeast(ver(3, 24, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 4, 1), ver(3, 4, 1)),
        patrol: range(ver(3, 13, 1), ver(3, 13, 2)),
        flutter: HostRequirement::AtLeast(ver(3, 24, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 4, 0), ver(3, 4, 0)),
        patrol: range(ver(3, 13, 0), ver(3, 13, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 24, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 3, 0), ver(3, 3, 0)),
        patrol: range(ver(3, 12, 0), ver(3, 12, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 24, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 2, 1), ver(3, 2, 1)),
        patrol: range(ver(3, 11, 2), ver(3, 11, 2)),
        flutter: HostRequirement::AtLeast(ver(3, 24, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 2, 0), ver(3, 2, 0)),
        patrol: range(ver(3, 11, 0), ver(3, 11, 1)),
        flutter: HostRequirement::AtLeast(ver(3, 22, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(3, 1, 0), ver(3, 1, 1)),
        patrol: range(ver(3, 10, 0), ver(3, 10, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 22, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 6, 5), ver(3, 0, 1)),
        patrol: range(ver(3, 6, 0), ver(3, 10, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 16, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 6, 0), ver(2, 6, 4)),
        patrol: range(ver(3, 4, 0), ver(3, 5, 2)),
        flutter: HostRequirement::AtLeast(ver(3, 16, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 3, 0), ver(2, 5, 0)),
        patrol: range(ver(3, 0, 0), ver(3, 3, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 16, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 2, 0), ver(2, 2, 2)),
        patrol: range(ver(2, 3, 0), ver(2, 3, 2)),
        flutter: HostRequirement::AtLeast(ver(3, 3, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 0, 1), ver(2, 1, 5)),
        patrol: range(ver(2, 0, 1), ver(2, 2, 5)),
        flutter: HostRequirement::AtLeast(ver(3, 3, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(2, 0, 0), ver(2, 0, 0)),
        patrol: range(ver(2, 0, 0), ver(2, 0, 0)),
        flutter: HostRequirement::AtLeast(ver(3, 3, 0)),
    },
    CompatibilityEntry {
        cli: range(ver(1, 1, 4), ver(1, 1, 11)),
        patrol: range(ver(1, 0, 9), ver(1, 1, 11)),
        flutter: HostRequirement::AtLeast(ver(3, 3, 0)),
    },
];
