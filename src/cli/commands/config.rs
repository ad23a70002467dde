//! Config command implementation.
//!
//! The `lintcheck config` command shows the resolved configuration.

use std::path::PathBuf;

use crate::cli::args::ConfigArgs;
use crate::config::resolve_config;
use crate::error::{LintcheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config_path: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self { config_path, args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = resolve_config(self.config_path.as_deref(), None)?;

        if let Some(path) = &self.config_path {
            ui.message(&format!("# {}", path.display()));
            ui.message("");
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| LintcheckError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| LintcheckError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
