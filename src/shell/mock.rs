//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning processes.
//! Responses are keyed by the exact command line; every invocation is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use lintcheck::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_success("npm list --depth 0", "eslint@8.0.0");
//!
//! let result = runner.run("npm list --depth 0", None).unwrap();
//! assert!(result.success);
//!
//! // Anything unscripted behaves like a missing binary.
//! let missing = runner.run("eslint src", None).unwrap();
//! assert_eq!(missing.exit_code, Some(127));
//! assert_eq!(runner.invocations().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{LintcheckError, Result};

use super::command::{CommandResult, CommandRunner};

/// Exit code shells use for "command not found".
pub const COMMAND_NOT_FOUND: i32 = 127;

/// A recorded call to [`MockRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    SpawnError,
}

/// Command runner returning pre-configured results.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Scripted>,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `command` to exit 0 with `stdout`.
    pub fn with_success(self, command: &str, stdout: &str) -> Self {
        self.with_exit(command, 0, stdout, "")
    }

    /// Script `command` to exit with `code`.
    pub fn with_exit(mut self, command: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            command.to_string(),
            Scripted::Exit {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Script `command` so the shell itself cannot be started.
    pub fn with_spawn_error(mut self, command: &str) -> Self {
        self.responses
            .insert(command.to_string(), Scripted::SpawnError);
        self
    }

    /// All invocations so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Whether `command` was run at least once.
    pub fn was_run(&self, command: &str) -> bool {
        self.invocations
            .borrow()
            .iter()
            .any(|i| i.command == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(Invocation {
            command: command.to_string(),
            cwd: cwd.map(Path::to_path_buf),
        });

        match self.responses.get(command) {
            Some(Scripted::Exit {
                code: 0,
                stdout,
                stderr,
            }) => Ok(CommandResult::success(
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(Scripted::Exit {
                code,
                stdout,
                stderr,
            }) => Ok(CommandResult::failure(
                Some(*code),
                stdout.clone(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(Scripted::SpawnError) => Err(LintcheckError::CommandFailed {
                command: command.to_string(),
                code: None,
            }),
            None => Ok(CommandResult::failure(
                Some(COMMAND_NOT_FOUND),
                String::new(),
                format!("sh: {}: command not found", first_word(command)),
                Duration::ZERO,
            )),
        }
    }
}

fn first_word(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}
