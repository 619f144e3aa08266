//! Environment export for downstream build steps.
//!
//! After validation the three toolchain versions are published so later
//! CI steps can consume them without re-introspecting. [`EnvExporter`]
//! has exactly one operation and arrives at the orchestrator as an
//! explicit argument; [`EnvFileExporter`] is the production
//! implementation, appending `KEY=value` lines to an env file in the
//! style of `GITHUB_ENV`.

use crate::compat::ToolchainVersions;
use crate::error::{PrepError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Env var naming the file that exported values are appended to.
pub const ENV_FILE_VAR: &str = "PATROLPREP_ENV_FILE";

/// Exported key for the Flutter SDK version.
pub const FLUTTER_VERSION_KEY: &str = "FLUTTER_VERSION";
/// Exported key for the Patrol CLI version.
pub const PATROL_CLI_VERSION_KEY: &str = "PATROL_CLI_VERSION";
/// Exported key for the `patrol` package version.
pub const PATROL_VERSION_KEY: &str = "PATROL_VERSION";

/// Exports key/value pairs into the environment store.
pub trait EnvExporter {
    /// Publish one key/value pair.
    fn export(&self, key: &str, value: &str) -> Result<()>;
}

/// Appends `KEY=value` lines to an env file.
#[derive(Debug)]
pub struct EnvFileExporter {
    path: PathBuf,
}

impl EnvFileExporter {
    /// Exporter writing to an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Exporter writing to the file named by [`ENV_FILE_VAR`].
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(ENV_FILE_VAR).map_err(|_| PrepError::ExportFailed {
            key: ENV_FILE_VAR.to_string(),
            message: format!("{} is not set", ENV_FILE_VAR),
        })?;
        Ok(Self::new(path))
    }

    /// The file exported values are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnvExporter for EnvFileExporter {
    fn export(&self, key: &str, value: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PrepError::ExportFailed {
                key: key.to_string(),
                message: format!("cannot open {}: {}", self.path.display(), e),
            })?;
        writeln!(file, "{}={}", key, value).map_err(|e| PrepError::ExportFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// Publish all three validated toolchain versions.
pub fn export_versions(exporter: &dyn EnvExporter, versions: &ToolchainVersions) -> Result<()> {
    exporter.export(FLUTTER_VERSION_KEY, &versions.flutter.to_string())?;
    exporter.export(PATROL_CLI_VERSION_KEY, &versions.patrol_cli.to_string())?;
    exporter.export(PATROL_VERSION_KEY, &versions.patrol.to_string())?;
    Ok(())
}
