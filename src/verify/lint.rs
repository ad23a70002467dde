//! Lint command execution.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{LintRunConfig, LintScope};
use crate::error::{LintcheckError, Result};
use crate::shell::CommandRunner;

/// Outcome of a lint command that exited zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintRunReport {
    pub name: String,
    pub command: String,
    /// `None` when the command inherited the verifier's working directory.
    pub cwd: Option<PathBuf>,
    pub output: String,
    /// Notices the linter wrote to stderr despite passing.
    pub stderr: String,
}

/// Working directory for `run`, given the target directory.
pub fn working_dir<'a>(run: &LintRunConfig, target_dir: &'a Path) -> Option<&'a Path> {
    match run.scope {
        LintScope::Caller => None,
        LintScope::Target => Some(target_dir),
    }
}

/// Run one lint command. Any non-zero exit is a [`LintcheckError::LintCommandFailure`].
pub fn run_lint(
    runner: &dyn CommandRunner,
    run: &LintRunConfig,
    target_dir: &Path,
) -> Result<LintRunReport> {
    let cwd = working_dir(run, target_dir);

    let result = runner
        .run(&run.command, cwd)
        .map_err(|e| {
            tracing::debug!(error = %e, command = %run.command, "Lint command did not start");
            LintcheckError::LintCommandFailure {
                name: run.name.clone(),
                command: run.command.clone(),
                code: None,
                output: "could not start the shell".to_string(),
            }
        })?;

    if !result.success {
        return Err(LintcheckError::LintCommandFailure {
            name: run.name.clone(),
            command: run.command.clone(),
            code: result.exit_code,
            output: result.combined_output(),
        });
    }

    Ok(LintRunReport {
        name: run.name.clone(),
        command: run.command.clone(),
        cwd: cwd.map(Path::to_path_buf),
        output: result.stdout,
        stderr: result.stderr,
    })
}
