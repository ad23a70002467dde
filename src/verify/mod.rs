//! Lint environment verification.
//!
//! - [`discovery`] - Locate the lint configuration file
//! - [`dependency`] - Search the direct dependency listing for a package
//! - [`lint`] - Run lint commands in their configured directory
//! - [`verifier`] - [`EnvironmentVerifier`], which runs the three in order

pub mod dependency;
pub mod discovery;
pub mod lint;
pub mod verifier;

pub use dependency::{check_dependency, DependencyStatus};
pub use discovery::{discover_config, discover_config_with};
pub use lint::{run_lint, working_dir, LintRunReport};
pub use verifier::{EnvironmentVerifier, VerificationReport};
