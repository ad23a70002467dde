//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, VerifyArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher using the config file at `config_path`, if any.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, runs `verify` against the default target.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = self.config_path.clone();
        match &cli.command {
            Some(Commands::Verify(args)) => {
                let cmd = super::verify::VerifyCommand::new(config_path, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(config_path, args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::verify::VerifyCommand::new(config_path, VerifyArgs::default());
                cmd.execute(ui)
            }
        }
    }

    /// Dispatch, reporting any error through `ui` as a failed verification.
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> CommandResult {
        match self.dispatch(cli, ui) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(error = ?e, "Verification aborted");
                ui.error(&format!("Verification failed: {}", e));
                CommandResult::failure(1)
            }
        }
    }
}
