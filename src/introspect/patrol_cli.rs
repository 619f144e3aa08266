//! Patrol CLI version discovery.

use crate::error::{PrepError, Result};
use crate::shell;
use crate::version::Version;

/// Binary name of the Patrol CLI.
pub const PATROL_BIN: &str = "patrol";

/// Discover the installed Patrol CLI version by running `patrol --version`.
pub fn installed_version() -> Result<Version> {
    let result =
        shell::run_capture(PATROL_BIN, &["--version"]).map_err(|e| PrepError::VersionDetection {
            tool: PATROL_BIN.to_string(),
            message: e.to_string(),
        })?;

    if !result.success {
        return Err(PrepError::VersionDetection {
            tool: PATROL_BIN.to_string(),
            message: format!("'patrol --version' exited with {:?}", result.exit_code),
        });
    }

    parse_version_output(&result.combined_output())
}

/// Extract a version from `patrol --version` output.
///
/// Output shape has varied across releases ("patrol_cli v2.6.5",
/// "patrol_cli 3.5.0"), so this scrapes the first dotted triple rather
/// than matching a fixed banner.
fn parse_version_output(output: &str) -> Result<Version> {
    let re = regex::Regex::new(r"(\d+\.\d+\.\d+(?:[-+][0-9A-Za-z.\-]+)?)").unwrap();
    let captured = re
        .captures(output)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| PrepError::VersionDetection {
            tool: PATROL_BIN.to_string(),
            message: format!("no version in output: {:?}", output.trim()),
        })?;
    Version::parse(captured.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v_prefixed_banner() {
        let version = parse_version_output("patrol_cli v2.6.5\n").unwrap();
        assert_eq!(version, Version::new(2, 6, 5));
    }

    #[test]
    fn parses_bare_banner() {
        let version = parse_version_output("patrol_cli 3.5.0").unwrap();
        assert_eq!(version, Version::new(3, 5, 0));
    }

    #[test]
    fn parses_version_with_surrounding_noise() {
        let output = "Updating package index...\npatrol_cli v4.0.1 (latest)\n";
        let version = parse_version_output(output).unwrap();
        assert_eq!(version, Version::new(4, 0, 1));
    }

    #[test]
    fn prerelease_suffix_is_dropped() {
        let version = parse_version_output("patrol_cli 3.14.0-dev.1").unwrap();
        assert_eq!(version, Version::new(3, 14, 0));
    }

    #[test]
    fn output_without_version_is_an_error() {
        let err = parse_version_output("command not found").unwrap_err();
        assert!(matches!(err, PrepError::VersionDetection { .. }));
    }
}
