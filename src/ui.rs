//! Terminal status output.
//!
//! One canonical set of status icons for step lifecycle lines, with a
//! bracketed fallback when stdout is not a TTY (CI logs). `NO_COLOR`
//! is honored by the `console` crate itself.

use console::{style, Term};

/// Status of a reported step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Step has started.
    Running,
    /// Step completed successfully.
    Success,
    /// Step failed.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    fn icon(self) -> &'static str {
        match self {
            Self::Running => "◆",
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    fn bracketed(self) -> &'static str {
        match self {
            Self::Running => "[run]",
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
        }
    }

    fn styled(self, tty: bool) -> String {
        if !tty {
            return self.bracketed().to_string();
        }
        let icon = self.icon();
        match self {
            Self::Running => style(icon).cyan().to_string(),
            Self::Success => style(icon).green().to_string(),
            Self::Failed => style(icon).red().bold().to_string(),
            Self::Warning => style(icon).yellow().to_string(),
        }
    }
}

/// Step lifecycle reporter.
#[derive(Debug)]
pub struct Ui {
    quiet: bool,
    stdout_tty: bool,
    stderr_tty: bool,
}

impl Ui {
    /// Create a reporter. `quiet` suppresses everything but failures.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            stdout_tty: Term::stdout().is_term(),
            stderr_tty: Term::stderr().is_term(),
        }
    }

    /// A step has started.
    pub fn step_started(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", StatusKind::Running.styled(self.stdout_tty), message);
        }
    }

    /// A step finished successfully.
    pub fn step_completed(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", StatusKind::Success.styled(self.stdout_tty), message);
        }
    }

    /// A step failed. Always printed, to stderr.
    pub fn step_failed(&self, message: &str) {
        eprintln!("{} {}", StatusKind::Failed.styled(self.stderr_tty), message);
    }

    /// Non-fatal warning.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", StatusKind::Warning.styled(self.stdout_tty), message);
        }
    }

    /// Plain informational line.
    pub fn message(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}
