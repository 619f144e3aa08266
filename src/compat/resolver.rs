//! Compatibility verdicts over the version table.

use crate::compat::table::{CompatibilityEntry, COMPATIBILITY_TABLE};
use crate::error::{PrepError, Result};
use crate::version::Version;

/// The concrete toolchain triple under validation.
///
/// Fields are owned, already-parsed versions — a missing version is
/// unrepresentable here, so callers must parse (and fail) before
/// constructing one. The value is ephemeral: built per check, discarded
/// after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainVersions {
    /// Installed Flutter SDK version.
    pub flutter: Version,
    /// Installed Patrol CLI version.
    pub patrol_cli: Version,
    /// `patrol` package version from the project lockfile.
    pub patrol: Version,
}

/// Check a toolchain triple against the compatibility table.
///
/// Scans entries in declaration order and succeeds on the first entry
/// whose CLI range, patrol range, and Flutter requirement all hold. The
/// verdict depends only on whether some entry matches, not on which.
/// Exhausting the table yields [`PrepError::IncompatibleVersions`]
/// naming all three inputs.
///
/// Pure function over immutable data; safe to call concurrently.
pub fn check_compatibility(versions: &ToolchainVersions) -> Result<()> {
    check_against(COMPATIBILITY_TABLE, versions)
}

/// Table-parametric form of [`check_compatibility`].
pub(crate) fn check_against(
    entries: &[CompatibilityEntry],
    versions: &ToolchainVersions,
) -> Result<()> {
    for entry in entries {
        if entry.cli.contains(versions.patrol_cli)
            && entry.patrol.contains(versions.patrol)
            && entry.flutter.accepts(versions.flutter)
        {
            return Ok(());
        }
    }
    Err(PrepError::IncompatibleVersions {
        flutter: versions.flutter.to_string(),
        patrol_cli: versions.patrol_cli.to_string(),
        patrol: versions.patrol.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(flutter: &str, patrol_cli: &str, patrol: &str) -> ToolchainVersions {
        ToolchainVersions {
            flutter: Version::parse(flutter).unwrap(),
            patrol_cli: Version::parse(patrol_cli).unwrap(),
            patrol: Version::parse(patrol).unwrap(),
        }
    }

    #[test]
    fn latest_pairing_at_range_max_is_compatible() {
        // CLI 4.0.0-4.0.1, patrol 4.0.0, Flutter pinned to 3.32.0
        assert!(check_compatibility(&triple("3.32.0", "4.0.1", "4.0.0")).is_ok());
    }

    #[test]
    fn pairing_at_range_min_is_compatible() {
        // CLI 3.7.0-3.8.0, patrol 3.16.0-3.17.0
        assert!(check_compatibility(&triple("3.32.0", "3.7.0", "3.16.0")).is_ok());
    }

    #[test]
    fn patrol_version_interior_to_range_is_compatible() {
        // CLI 3.9.0-3.10.0, patrol 3.18.0-3.19.0
        assert!(check_compatibility(&triple("3.32.0", "3.9.0", "3.18.5")).is_ok());
    }

    #[test]
    fn cli_version_interior_to_range_is_compatible() {
        // CLI 2.6.5-3.0.1, patrol 3.6.0-3.10.0, Flutter >= 3.16.0
        assert!(check_compatibility(&triple("3.16.0", "2.6.5", "3.7.5")).is_ok());
    }

    #[test]
    fn mid_table_pairing_at_max_is_compatible() {
        assert!(check_compatibility(&triple("3.16.0", "3.0.1", "3.10.0")).is_ok());
    }

    #[test]
    fn oldest_pairing_at_minimum_bounds_is_compatible() {
        // CLI 1.1.4-1.1.11, patrol 1.0.9-1.1.11, Flutter >= 3.3.0
        assert!(check_compatibility(&triple("3.3.0", "1.1.4", "1.0.9")).is_ok());
    }

    #[test]
    fn flutter_above_minimum_threshold_is_compatible() {
        // AtLeast entries accept any newer Flutter release.
        assert!(check_compatibility(&triple("3.19.2", "2.6.5", "3.7.5")).is_ok());
    }

    #[test]
    fn flutter_newer_than_pinned_release_is_incompatible() {
        // The 4.0.x line pins Flutter exactly; 3.38.1 does not satisfy it.
        let err = check_compatibility(&triple("3.38.1", "4.0.1", "4.0.0")).unwrap_err();
        assert!(matches!(err, PrepError::IncompatibleVersions { .. }));
    }

    #[test]
    fn flutter_below_minimum_threshold_is_incompatible() {
        // CLI 3.2.1 / patrol 3.11.2 needs Flutter >= 3.24.0.
        assert!(check_compatibility(&triple("3.22.0", "3.2.1", "3.11.2")).is_err());
    }

    #[test]
    fn versions_beyond_any_range_are_incompatible() {
        assert!(check_compatibility(&triple("3.32.0", "5.0.0", "5.0.0")).is_err());
    }

    #[test]
    fn cli_above_its_range_max_is_incompatible() {
        assert!(check_compatibility(&triple("3.32.0", "4.1.0", "4.0.0")).is_err());
    }

    #[test]
    fn patrol_above_its_range_max_is_incompatible() {
        assert!(check_compatibility(&triple("3.32.0", "4.0.0", "4.1.0")).is_err());
    }

    #[test]
    fn cli_and_patrol_just_above_range_are_incompatible() {
        assert!(check_compatibility(&triple("3.24.0", "3.6.1", "3.15.3")).is_err());
    }

    #[test]
    fn incompatible_error_names_all_three_versions() {
        let err = check_compatibility(&triple("3.0.0", "5.0.0", "5.0.0")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("3.0.0"));
        assert!(msg.contains("5.0.0"));
    }

    #[test]
    fn verdict_is_deterministic() {
        let versions = triple("3.32.0", "4.0.1", "4.0.0");
        assert_eq!(
            check_compatibility(&versions).is_ok(),
            check_compatibility(&versions).is_ok()
        );
        let versions = triple("3.38.1", "4.0.1", "4.0.0");
        assert_eq!(
            check_compatibility(&versions).is_ok(),
            check_compatibility(&versions).is_ok()
        );
    }

    #[test]
    fn verdict_does_not_depend_on_entry_order() {
        let mut reversed: Vec<_> = COMPATIBILITY_TABLE.to_vec();
        reversed.reverse();

        let samples = [
            triple("3.32.0", "4.0.1", "4.0.0"),
            triple("3.16.0", "2.6.5", "3.7.5"),
            triple("3.3.0", "1.1.4", "1.0.9"),
            triple("3.38.1", "4.0.1", "4.0.0"),
            triple("3.32.0", "5.0.0", "5.0.0"),
        ];
        for versions in &samples {
            assert_eq!(
                check_against(COMPATIBILITY_TABLE, versions).is_ok(),
                check_against(&reversed, versions).is_ok(),
                "verdict changed under reversal for {:?}",
                versions
            );
        }
    }
}
