//! Command-line interface.
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - dispatch from parsed arguments to command logic

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, PrepareArgs, TableArgs};
pub use commands::dispatch;
