//! Flutter SDK version discovery.

use crate::error::{PrepError, Result};
use crate::shell;
use crate::version::Version;

/// Binary name of the Flutter SDK tool.
pub const FLUTTER_BIN: &str = "flutter";

/// Discover the installed Flutter SDK version.
///
/// Prefers `flutter --version --machine` (stable JSON, no banner
/// scraping) and falls back to the human banner for older SDKs that
/// don't support the machine flag.
pub fn installed_version() -> Result<Version> {
    let machine = shell::run_capture(FLUTTER_BIN, &["--version", "--machine"]).map_err(|e| {
        PrepError::VersionDetection {
            tool: FLUTTER_BIN.to_string(),
            message: e.to_string(),
        }
    })?;

    if machine.success {
        if let Ok(version) = version_from_machine_json(&machine.stdout) {
            return Ok(version);
        }
    }

    let banner = shell::run_capture(FLUTTER_BIN, &["--version"])?;
    if !banner.success {
        return Err(PrepError::VersionDetection {
            tool: FLUTTER_BIN.to_string(),
            message: format!("'flutter --version' exited with {:?}", banner.exit_code),
        });
    }
    version_from_banner(&banner.combined_output())
}

/// Read `frameworkVersion` from `flutter --version --machine` output.
fn version_from_machine_json(json: &str) -> Result<Version> {
    let value: serde_json::Value =
        serde_json::from_str(json.trim()).map_err(|e| PrepError::VersionDetection {
            tool: FLUTTER_BIN.to_string(),
            message: format!("unparseable machine output: {}", e),
        })?;
    let framework = value["frameworkVersion"]
        .as_str()
        .ok_or_else(|| PrepError::VersionDetection {
            tool: FLUTTER_BIN.to_string(),
            message: "no frameworkVersion in machine output".to_string(),
        })?;
    Version::parse(framework)
}

/// Extract the version from the human `flutter --version` banner.
fn version_from_banner(output: &str) -> Result<Version> {
    let re = regex::Regex::new(r"Flutter (\d+\.\d+\.\d+)").unwrap();
    let captured = re
        .captures(output)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| PrepError::VersionDetection {
            tool: FLUTTER_BIN.to_string(),
            message: format!("no version in output: {:?}", output.trim()),
        })?;
    Version::parse(captured.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MACHINE_OUTPUT: &str = r#"{
  "frameworkVersion": "3.32.0",
  "channel": "stable",
  "repositoryUrl": "https://github.com/flutter/flutter.git",
  "frameworkRevision": "e5b0c4e0a9",
  "engineRevision": "aeee7ea0b2",
  "dartSdkVersion": "3.8.0"
}"#;

    const BANNER_OUTPUT: &str = "Flutter 3.16.0 • channel stable • \
https://github.com/flutter/flutter.git\nFramework • revision db7ef5bf9f \
(8 weeks ago) • 2023-11-15 11:25:44 -0800\nTools • Dart 3.2.0 • DevTools 2.28.2\n";

    #[test]
    fn machine_output_yields_framework_version() {
        let version = version_from_machine_json(MACHINE_OUTPUT).unwrap();
        assert_eq!(version, Version::new(3, 32, 0));
    }

    #[test]
    fn machine_output_without_framework_version_is_an_error() {
        let err = version_from_machine_json(r#"{"channel": "stable"}"#).unwrap_err();
        assert!(matches!(err, PrepError::VersionDetection { .. }));
    }

    #[test]
    fn malformed_machine_output_is_an_error() {
        assert!(version_from_machine_json("Welcome to Flutter!").is_err());
    }

    #[test]
    fn banner_yields_version() {
        let version = version_from_banner(BANNER_OUTPUT).unwrap();
        assert_eq!(version, Version::new(3, 16, 0));
    }

    #[test]
    fn banner_without_version_is_an_error() {
        assert!(version_from_banner("flutter: command output garbled").is_err());
    }

    #[test]
    fn banner_regex_requires_the_flutter_prefix() {
        // A Dart version alone must not be mistaken for the SDK version.
        assert!(version_from_banner("Tools • Dart 3.2.0").is_err());
    }
}
