//! Command-line interface for lintcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigArgs, VerifyArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
