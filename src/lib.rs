//! patrolprep - Patrol toolchain preparation for Flutter CI.
//!
//! patrolprep makes sure a Flutter project's Patrol toolchain is usable
//! before UI tests run: it installs the Patrol CLI when missing,
//! discovers the installed Flutter SDK / Patrol CLI / `patrol` package
//! versions, validates the triple against a curated compatibility
//! table, and exports the validated versions for later build steps.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - The compatibility table and resolver (the core)
//! - [`error`] - Error types and result aliases
//! - [`export`] - Environment export for downstream steps
//! - [`install`] - Patrol CLI installation
//! - [`introspect`] - Installed-tool version discovery
//! - [`shell`] - Process execution
//! - [`steps`] - The prepare workflow orchestration
//! - [`ui`] - Terminal status output
//! - [`version`] - Semantic version values and ranges
//!
//! # Example
//!
//! ```
//! use patrolprep::compat::{check_compatibility, ToolchainVersions};
//! use patrolprep::version::Version;
//!
//! let versions = ToolchainVersions {
//!     flutter: Version::parse("3.32.0").unwrap(),
//!     patrol_cli: Version::parse("4.0.1").unwrap(),
//!     patrol: Version::parse("4.0.0").unwrap(),
//! };
//! assert!(check_compatibility(&versions).is_ok());
//! ```

pub mod cli;
pub mod compat;
pub mod error;
pub mod export;
pub mod install;
pub mod introspect;
pub mod shell;
pub mod steps;
pub mod ui;
pub mod version;

pub use error::{PrepError, Result};
