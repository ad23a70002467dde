//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandResult, CommandRunner, ShellRunner};
pub use mock::{Invocation, MockRunner, COMMAND_NOT_FOUND};
pub use platform::is_ci;
