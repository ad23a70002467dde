//! Shell command execution.

use crate::error::{LintcheckError, Result};
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout followed by stderr, for reporting a failed command.
    pub fn combined_output(&self) -> String {
        match (self.stdout.trim().is_empty(), self.stderr.trim().is_empty()) {
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr.trim_end()),
            (false, true) => self.stdout.trim_end().to_string(),
            (true, false) => self.stderr.trim_end().to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Runs shell command lines.
///
/// Implementations block until the command exits. A non-zero exit is an
/// `Ok` result with `success == false`; `Err` means the command could not
/// be started at all.
pub trait CommandRunner {
    /// Run `command`, in `cwd` if given, otherwise in the current directory.
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by the user's shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
        execute(command, cwd)
    }
}

/// Execute a shell command, capturing stdout and stderr.
pub fn execute(command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    tracing::debug!(%command, cwd = ?cwd, %shell, "Executing command");

    let output = cmd.output().map_err(|e| {
        tracing::debug!(%command, error = %e, "Failed to spawn shell");
        LintcheckError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        %command,
        code = ?output.status.code(),
        elapsed_ms = duration.as_millis() as u64,
        "Command finished"
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses a login shell on Unix so that `npm` and `eslint` installed through
/// nvm, volta, or mise resolve the same way they do in the user's terminal.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", None).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 3", None).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_captures_stderr() {
        let cmd = if cfg!(target_os = "windows") {
            "echo oops 1>&2"
        } else {
            "echo oops >&2"
        };

        let result = execute(cmd, None).unwrap();
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let cmd = if cfg!(target_os = "windows") {
            "dir /b"
        } else {
            "ls"
        };

        let result = execute(cmd, Some(temp.path())).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn shell_runner_delegates_to_execute() {
        let result = ShellRunner::new().run("echo runner", None).unwrap();
        assert!(result.stdout.contains("runner"));
    }

    #[test]
    fn combined_output_joins_both_streams() {
        let result = CommandResult::failure(
            Some(1),
            "out\n".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr");
    }

    #[test]
    fn combined_output_empty_when_silent() {
        let result = CommandResult::failure(Some(1), String::new(), "  ".into(), Duration::ZERO);
        assert_eq!(result.combined_output(), "");
    }
}
