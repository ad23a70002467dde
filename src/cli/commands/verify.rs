//! Verify command implementation.
//!
//! The `lintcheck verify` command runs the [`EnvironmentVerifier`] and
//! optionally prints its report as JSON.

use std::path::PathBuf;

use crate::cli::args::VerifyArgs;
use crate::config::resolve_config;
use crate::error::{LintcheckError, Result};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::{OutputMode, UserInterface};
use crate::verify::EnvironmentVerifier;

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    config_path: Option<PathBuf>,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(config_path: Option<PathBuf>, args: VerifyArgs) -> Self {
        Self { config_path, args }
    }

    /// Execute with an explicit command runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        let config = resolve_config(self.config_path.as_deref(), self.args.target_dir.as_deref())?;

        // JSON goes to stdout alone; progress lines would corrupt it.
        let previous_mode = ui.output_mode();
        if self.args.json {
            ui.set_output_mode(OutputMode::Silent);
        } else {
            ui.show_header(&format!(
                "Verifying lint setup in {}",
                config.target_dir.display()
            ));
        }

        let verifier = EnvironmentVerifier::new(config, runner);
        let outcome = verifier.verify(ui);
        ui.set_output_mode(previous_mode);
        let report = outcome?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| LintcheckError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.success("Lint environment verified");
        }

        Ok(CommandResult::success())
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &ShellRunner::new())
    }
}
