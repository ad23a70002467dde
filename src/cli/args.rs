//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lintcheck - verify a project's lint setup.
#[derive(Debug, Parser)]
#[command(name = "lintcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML file overriding the built-in checks
    #[arg(short, long, global = true, env = "LINTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify lint configuration, dependency and lint runs (default)
    Verify(VerifyArgs),

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Project directory to verify [default: ./webview-ui/]
    pub target_dir: Option<PathBuf>,

    /// Print the verification report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["lintcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn verify_takes_positional_target() {
        let cli = Cli::try_parse_from(["lintcheck", "verify", "app/web", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Verify(args)) => {
                assert_eq!(args.target_dir, Some(PathBuf::from("app/web")));
                assert!(args.json);
            }
            other => panic!("expected verify, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["lintcheck", "config", "--config", "lc.yml", "--debug"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("lc.yml")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }
}
