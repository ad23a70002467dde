//! Verifier configuration.
//!
//! - [`schema`] - Config types and their defaults
//! - [`loader`] - YAML loading and CLI override resolution

pub mod loader;
pub mod schema;

pub use loader::{load_config, resolve_config};
pub use schema::{
    LintRunConfig, LintScope, VerifierConfig, DEFAULT_DEPENDENCY_LISTING,
    DEFAULT_REQUIRED_PACKAGE, DEFAULT_TARGET_DIR,
};
