//! Sequential environment verification.

use serde::Serialize;
use std::path::PathBuf;

use crate::config::VerifierConfig;
use crate::error::{LintcheckError, Result};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dependency::{check_dependency, DependencyStatus};
use super::discovery::discover_config;
use super::lint::{run_lint, LintRunReport};

/// Everything a successful run found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub target_dir: PathBuf,
    pub config_path: PathBuf,
    pub required_package: String,
    pub dependency: DependencyStatus,
    pub lint_runs: Vec<LintRunReport>,
}

/// Checks a project's lint setup: config discovery, dependency listing,
/// then each lint command, in that order.
///
/// The first hard failure aborts the run. A required package missing from
/// the listing only produces a warning.
pub struct EnvironmentVerifier<'a> {
    config: VerifierConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> EnvironmentVerifier<'a> {
    /// Create a verifier for `config`, running commands through `runner`.
    pub fn new(config: VerifierConfig, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Run every check.
    pub fn verify(&self, ui: &mut dyn UserInterface) -> Result<VerificationReport> {
        let target_dir = &self.config.target_dir;
        tracing::debug!(target_dir = %target_dir.display(), "Starting verification");

        let config_path = discover_config(target_dir, &self.config.config_candidates)?;
        ui.message(&format!(
            "Found ESLint configuration file at {}",
            config_path.display()
        ));

        let package = &self.config.required_package;
        let (dependency, listing) = check_dependency(
            self.runner,
            target_dir,
            &self.config.dependency_listing,
            package,
        )?;
        if ui.output_mode().shows_command_output() {
            ui.message(listing.trim_end());
        }
        match dependency {
            DependencyStatus::Installed => ui.success(&format!("{} is installed.", package)),
            DependencyStatus::NotListed => ui.warning(&format!(
                "{} is not listed as a direct dependency.",
                package
            )),
        }

        let mut lint_runs = Vec::with_capacity(self.config.lint_runs.len());
        for run in &self.config.lint_runs {
            ui.message(&format!("Running {} lint check:", run.name));

            let mut spinner = ui.start_spinner(&format!("Running {}", run.command));
            let report = match run_lint(self.runner, run, target_dir) {
                Ok(report) => {
                    spinner.finish_success(&format!("{} lint passed", run.name));
                    report
                }
                Err(e) => {
                    spinner.finish_error(&format!("{} lint failed", run.name));
                    if let LintcheckError::LintCommandFailure { output, .. } = &e {
                        if !output.is_empty() {
                            ui.message(&format!("{} lint output:", capitalize(&run.name)));
                            ui.message(output);
                        }
                    }
                    return Err(e);
                }
            };

            ui.message(&format!("{} lint output:", capitalize(&run.name)));
            ui.message(report.output.trim_end());
            if !report.stderr.trim().is_empty() {
                ui.message(report.stderr.trim_end());
            }
            lint_runs.push(report);
        }

        Ok(VerificationReport {
            target_dir: target_dir.clone(),
            config_path,
            required_package: package.clone(),
            dependency,
            lint_runs,
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
