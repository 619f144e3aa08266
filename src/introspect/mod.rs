//! Installed-tool version discovery.
//!
//! Each submodule answers one question about the machine or project:
//!
//! - [`flutter`] - Which Flutter SDK is on PATH
//! - [`patrol_cli`] - Which Patrol CLI is on PATH
//! - [`package`] - Which `patrol` package the project locks
//!
//! All discovery is external-collaborator glue: the outputs are parsed
//! [`Version`](crate::version::Version) values handed to the resolver,
//! which itself performs no I/O.

pub mod flutter;
pub mod package;
pub mod patrol_cli;
