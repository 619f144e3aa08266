//! `patrol` package version from the project lockfile.

use crate::error::{PrepError, Result};
use crate::version::Version;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Package whose locked version pairs with the Patrol CLI.
pub const PATROL_PACKAGE: &str = "patrol";

/// Minimal view of a `pubspec.lock` file.
#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    packages: HashMap<String, LockedPackage>,
}

/// One locked package. SDK-sourced entries carry no version.
#[derive(Debug, Deserialize)]
struct LockedPackage {
    version: Option<String>,
}

/// Read the locked `patrol` package version from `<project>/pubspec.lock`.
pub fn patrol_version(project_root: &Path) -> Result<Version> {
    let path = project_root.join("pubspec.lock");
    let content = fs::read_to_string(&path).map_err(|e| PrepError::VersionDetection {
        tool: PATROL_PACKAGE.to_string(),
        message: format!("cannot read {}: {}", path.display(), e),
    })?;
    version_from_lockfile(&content)
}

fn version_from_lockfile(content: &str) -> Result<Version> {
    let lockfile: Lockfile =
        serde_yaml::from_str(content).map_err(|e| PrepError::VersionDetection {
            tool: PATROL_PACKAGE.to_string(),
            message: format!("unparseable pubspec.lock: {}", e),
        })?;

    let locked = lockfile
        .packages
        .get(PATROL_PACKAGE)
        .and_then(|pkg| pkg.version.as_deref())
        .ok_or_else(|| PrepError::VersionDetection {
            tool: PATROL_PACKAGE.to_string(),
            message: "patrol is not a locked dependency of this project".to_string(),
        })?;

    Version::parse(locked)
}
