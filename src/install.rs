//! Patrol CLI installation.
//!
//! [`Installer`] is the capability seam: production code shells out to
//! `dart pub global activate`, tests substitute a fake. The
//! orchestration in [`ensure_installed`] never reinstalls over a working
//! CLI — an existing installation wins, whatever its version; the
//! compatibility check downstream decides whether it is usable.

use crate::error::{PrepError, Result};
use crate::introspect::patrol_cli;
use crate::shell;
use crate::version::Version;

/// Pub package that provides the `patrol` binary.
pub const CLI_PACKAGE: &str = "patrol_cli";

/// Capability seam for CLI installation.
pub trait Installer {
    /// Version of the already-installed CLI, if one can be detected.
    fn installed_version(&self) -> Result<Version>;

    /// Install the CLI, optionally pinning a version.
    fn install(&self, version: Option<&Version>) -> Result<()>;
}

/// Installs the Patrol CLI through `dart pub global activate`.
#[derive(Debug, Default)]
pub struct PubGlobalInstaller;

impl Installer for PubGlobalInstaller {
    fn installed_version(&self) -> Result<Version> {
        patrol_cli::installed_version()
    }

    fn install(&self, version: Option<&Version>) -> Result<()> {
        let mut args = vec!["pub", "global", "activate", CLI_PACKAGE];
        let pinned;
        if let Some(version) = version {
            pinned = version.to_string();
            args.push(&pinned);
        }

        let result = shell::run_capture("dart", &args).map_err(|e| PrepError::InstallFailed {
            tool: CLI_PACKAGE.to_string(),
            message: e.to_string(),
        })?;

        if !result.success {
            return Err(PrepError::InstallFailed {
                tool: CLI_PACKAGE.to_string(),
                message: format!(
                    "pub activation exited with {:?}: {}",
                    result.exit_code,
                    result.stderr.trim()
                ),
            });
        }
        Ok(())
    }
}

/// Ensure the Patrol CLI is installed and return its version.
///
/// An existing installation is used as-is. When none is found, the CLI
/// is installed (pinned to `requested` when given) and the version is
/// re-read to confirm the installation actually took.
pub fn ensure_installed(installer: &dyn Installer, requested: Option<&Version>) -> Result<Version> {
    if let Ok(version) = installer.installed_version() {
        tracing::debug!("Patrol CLI already installed: {}", version);
        return Ok(version);
    }

    if requested.is_none() {
        tracing::warn!("No Patrol CLI version was requested. Using the latest release.");
    }
    installer.install(requested)?;

    installer
        .installed_version()
        .map_err(|e| PrepError::InstallFailed {
            tool: CLI_PACKAGE.to_string(),
            message: format!("version check after install failed: {}", e),
        })
}
