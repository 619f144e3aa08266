//! The preparation workflow.
//!
//! `prepare` runs four steps in order: ensure the Patrol CLI is
//! installed, discover the Flutter and `patrol` package versions, check
//! the triple against the compatibility table, and export the validated
//! versions. Collaborators (installer, version source, exporter) arrive
//! as trait objects so the workflow runs against fakes in tests.

use crate::compat::{check_compatibility, ToolchainVersions};
use crate::error::Result;
use crate::export::{export_versions, EnvExporter};
use crate::install::{ensure_installed, Installer};
use crate::introspect::{flutter, package};
use crate::ui::Ui;
use crate::version::Version;
use std::path::{Path, PathBuf};

/// Options for the prepare workflow.
#[derive(Debug, Clone, Default)]
pub struct PrepareOptions {
    /// Flutter project root (location of `pubspec.lock`).
    pub project_root: PathBuf,

    /// Patrol CLI version to pin if an installation is needed.
    pub requested_cli: Option<Version>,

    /// Fail instead of installing when the CLI is missing.
    pub skip_install: bool,
}

/// Outcome of a successful prepare run.
#[derive(Debug, Clone, Copy)]
pub struct PrepareReport {
    /// The validated toolchain triple.
    pub versions: ToolchainVersions,
}

/// Discovery seam for the host-side versions.
pub trait VersionSource {
    /// Installed Flutter SDK version.
    fn flutter_version(&self) -> Result<Version>;

    /// Locked `patrol` package version for the project.
    fn patrol_package_version(&self, project_root: &Path) -> Result<Version>;
}

/// Production version source: asks the real tools.
#[derive(Debug, Default)]
pub struct SystemVersionSource;

impl VersionSource for SystemVersionSource {
    fn flutter_version(&self) -> Result<Version> {
        flutter::installed_version()
    }

    fn patrol_package_version(&self, project_root: &Path) -> Result<Version> {
        package::patrol_version(project_root)
    }
}

/// Run the full preparation workflow.
pub fn run_prepare(
    options: &PrepareOptions,
    installer: &dyn Installer,
    source: &dyn VersionSource,
    exporter: &dyn EnvExporter,
    ui: &Ui,
) -> Result<PrepareReport> {
    ui.step_started("Checking Patrol CLI installation");
    let patrol_cli = if options.skip_install {
        installer.installed_version()?
    } else {
        ensure_installed(installer, options.requested_cli.as_ref())?
    };
    ui.step_completed(&format!("Patrol CLI {}", patrol_cli));

    ui.step_started("Discovering toolchain versions");
    let flutter = source.flutter_version()?;
    let patrol = source.patrol_package_version(&options.project_root)?;
    ui.step_completed(&format!("Flutter {}, patrol {}", flutter, patrol));

    let versions = ToolchainVersions {
        flutter,
        patrol_cli,
        patrol,
    };

    ui.step_started("Validating version compatibility");
    match check_compatibility(&versions) {
        Ok(()) => ui.step_completed("Toolchain versions are compatible"),
        Err(e) => {
            ui.step_failed(&e.to_string());
            return Err(e);
        }
    }

    ui.step_started("Exporting versions");
    export_versions(exporter, &versions)?;
    ui.step_completed("Versions exported");

    tracing::info!(
        flutter = %versions.flutter,
        patrol_cli = %versions.patrol_cli,
        patrol = %versions.patrol,
        "prepare finished"
    );
    Ok(PrepareReport { versions })
}
