//! Command dispatch.

use crate::cli::args::{CheckArgs, Cli, Commands, PrepareArgs, TableArgs};
use crate::compat::{check_compatibility, ToolchainVersions, COMPATIBILITY_TABLE};
use crate::error::Result;
use crate::export::EnvFileExporter;
use crate::install::PubGlobalInstaller;
use crate::steps::{run_prepare, PrepareOptions, SystemVersionSource};
use crate::ui::Ui;
use crate::version::Version;
use serde::Serialize;

/// Dispatch the parsed CLI to its command, returning the process exit code.
pub fn dispatch(cli: &Cli, ui: &Ui) -> Result<u8> {
    match &cli.command {
        Some(Commands::Prepare(args)) => prepare(args, ui),
        Some(Commands::Check(args)) => check(args, ui),
        Some(Commands::Table(args)) => table(args, ui),
        None => prepare(&PrepareArgs::bare(), ui),
    }
}

fn prepare(args: &PrepareArgs, ui: &Ui) -> Result<u8> {
    let project_root = match &args.project {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let requested_cli = args
        .cli_version
        .as_deref()
        .map(Version::parse)
        .transpose()?;
    let exporter = match &args.env_file {
        Some(path) => EnvFileExporter::new(path),
        None => EnvFileExporter::from_env()?,
    };

    let options = PrepareOptions {
        project_root,
        requested_cli,
        skip_install: args.skip_install,
    };
    let report = run_prepare(
        &options,
        &PubGlobalInstaller,
        &SystemVersionSource,
        &exporter,
        ui,
    )?;

    ui.message(&format!(
        "Toolchain ready: Flutter {}, Patrol CLI {}, patrol {}",
        report.versions.flutter, report.versions.patrol_cli, report.versions.patrol
    ));
    Ok(0)
}

/// Machine-readable `check` output.
#[derive(Debug, Serialize)]
struct CheckVerdict {
    compatible: bool,
    flutter: Version,
    patrol_cli: Version,
    patrol: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn check(args: &CheckArgs, ui: &Ui) -> Result<u8> {
    let versions = ToolchainVersions {
        flutter: Version::parse(&args.flutter)?,
        patrol_cli: Version::parse(&args.cli)?,
        patrol: Version::parse(&args.patrol)?,
    };

    let verdict = check_compatibility(&versions);

    if args.json {
        let payload = CheckVerdict {
            compatible: verdict.is_ok(),
            flutter: versions.flutter,
            patrol_cli: versions.patrol_cli,
            patrol: versions.patrol,
            reason: verdict.as_ref().err().map(|e| e.to_string()),
        };
        let json = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
        println!("{}", json);
    }

    match verdict {
        Ok(()) => {
            if !args.json {
                ui.step_completed(&format!(
                    "Flutter {}, Patrol CLI {} and patrol {} are compatible",
                    versions.flutter, versions.patrol_cli, versions.patrol
                ));
            }
            Ok(0)
        }
        Err(e) => {
            if !args.json {
                ui.step_failed(&e.to_string());
            }
            Ok(1)
        }
    }
}

fn table(args: &TableArgs, ui: &Ui) -> Result<u8> {
    if args.json {
        let json = serde_json::to_string_pretty(COMPATIBILITY_TABLE).map_err(anyhow::Error::from)?;
        println!("{}", json);
        return Ok(0);
    }

    for entry in COMPATIBILITY_TABLE {
        ui.message(&format!(
            "Patrol CLI {:<17}  patrol {:<17}  Flutter {}",
            entry.cli.to_string(),
            entry.patrol.to_string(),
            entry.flutter
        ));
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn dispatch_args(argv: &[&str]) -> Result<u8> {
        let cli = Cli::parse_from(argv);
        let ui = Ui::new(true);
        dispatch(&cli, &ui)
    }

    #[test]
    fn check_compatible_triple_exits_zero() {
        let code = dispatch_args(&[
            "patrolprep",
            "check",
            "--flutter",
            "3.32.0",
            "--cli",
            "4.0.1",
            "--patrol",
            "4.0.0",
        ])
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn check_incompatible_triple_exits_one() {
        let code = dispatch_args(&[
            "patrolprep",
            "check",
            "--flutter",
            "3.32.0",
            "--cli",
            "5.0.0",
            "--patrol",
            "5.0.0",
        ])
        .unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn check_malformed_version_is_an_error_not_a_verdict() {
        let result = dispatch_args(&[
            "patrolprep",
            "check",
            "--flutter",
            "abc",
            "--cli",
            "4.0.1",
            "--patrol",
            "4.0.0",
        ]);
        assert!(matches!(
            result,
            Err(crate::error::PrepError::InvalidVersionFormat { .. })
        ));
    }

    #[test]
    fn table_command_exits_zero() {
        assert_eq!(dispatch_args(&["patrolprep", "table"]).unwrap(), 0);
    }

    #[test]
    fn table_json_exits_zero() {
        assert_eq!(dispatch_args(&["patrolprep", "table", "--json"]).unwrap(), 0);
    }
}
