//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// patrolprep - Patrol toolchain preparation for Flutter CI.
#[derive(Debug, Parser)]
#[command(name = "patrolprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prepare the Patrol toolchain (default if no command specified)
    Prepare(PrepareArgs),

    /// Check an explicit version triple against the compatibility table
    Check(CheckArgs),

    /// Print the compatibility table
    Table(TableArgs),
}

/// Arguments for the `prepare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PrepareArgs {
    /// Path to the Flutter project root (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Patrol CLI version to pin when an installation is needed
    #[arg(long, value_name = "VERSION", env = "PATROL_CLI_VERSION")]
    pub cli_version: Option<String>,

    /// File that exported KEY=value lines are appended to
    #[arg(long, value_name = "PATH", env = "PATROLPREP_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Fail instead of installing when the Patrol CLI is missing
    #[arg(long)]
    pub skip_install: bool,
}

impl PrepareArgs {
    /// Defaults used when the binary runs with no subcommand.
    pub fn bare() -> Self {
        Self {
            project: None,
            cli_version: None,
            env_file: None,
            skip_install: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Flutter SDK version
    #[arg(long, value_name = "VERSION")]
    pub flutter: String,

    /// Patrol CLI version
    #[arg(long = "cli", value_name = "VERSION")]
    pub cli: String,

    /// patrol package version
    #[arg(long, value_name = "VERSION")]
    pub patrol: String,

    /// Output the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `table` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TableArgs {
    /// Output the table as JSON
    #[arg(long)]
    pub json: bool,
}
