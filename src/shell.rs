//! Process execution for tool introspection and installation.
//!
//! Commands here are bounded, local tool invocations (`flutter`,
//! `patrol`, `dart`), so there is no streaming or timeout machinery —
//! output is captured whole and returned.

use crate::error::{PrepError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Combined output, stderr appended after stdout.
    ///
    /// Some tools print their version banner to stderr; callers that
    /// only scrape output should not care which stream it arrived on.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Execute a program with arguments, capturing output.
///
/// A spawn failure (program not on PATH) is an error; a non-zero exit
/// is a normal result with `success == false`.
pub fn run(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());

    let command_str = display_command(program, args);
    tracing::debug!("Running: {}", command_str);

    let output = cmd.output().map_err(|_| PrepError::CommandFailed {
        command: command_str,
        code: None,
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Execute with default options.
pub fn run_capture(program: &str, args: &[&str]) -> Result<CommandResult> {
    run(program, args, &CommandOptions::default())
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout() {
        let result = run_capture("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn nonzero_exit_is_a_result_not_an_error() {
        let result = run_capture("sh", &["-c", "exit 3"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = run_capture("this-command-does-not-exist-12345", &[]).unwrap_err();
        assert!(matches!(err, PrepError::CommandFailed { .. }));
    }

    #[test]
    fn env_is_passed_through() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("PREP_TEST_VALUE".to_string(), "marker".to_string());
        let result = run("sh", &["-c", "echo $PREP_TEST_VALUE"], &options).unwrap();
        assert!(result.stdout.contains("marker"));
    }

    #[test]
    fn cwd_is_respected() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let result = run("pwd", &[], &options).unwrap();
        let printed = result.stdout.trim();
        // Resolve symlinks (macOS /tmp) before comparing.
        let expected = temp.path().canonicalize().unwrap();
        let printed = std::path::Path::new(printed).canonicalize().unwrap();
        assert_eq!(printed, expected);
    }

    #[test]
    fn combined_output_appends_stderr() {
        let result = run_capture("sh", &["-c", "echo out; echo err 1>&2"]).unwrap();
        let combined = result.combined_output();
        assert!(combined.contains("out"));
        assert!(combined.contains("err"));
    }

    #[test]
    fn display_command_joins_args() {
        assert_eq!(display_command("patrol", &["--version"]), "patrol --version");
        assert_eq!(display_command("pwd", &[]), "pwd");
    }
}
