//! lintcheck - verify that a project's lint setup is in working order.
//!
//! A run performs three checks in order and stops at the first hard failure:
//!
//! 1. Locate the lint configuration file (`.eslintrc.js`, then `.eslintrc.json`).
//! 2. List direct dependencies and look for the required lint config package.
//!    A missing package is only a warning.
//! 3. Run each lint command and show its output.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Verifier configuration and YAML loading
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`verify`] - The verification checks
//!
//! # Example
//!
//! ```
//! use lintcheck::config::VerifierConfig;
//! use lintcheck::shell::MockRunner;
//! use lintcheck::ui::MockUI;
//! use lintcheck::verify::EnvironmentVerifier;
//! use lintcheck::LintcheckError;
//!
//! let config = VerifierConfig {
//!     target_dir: "/nonexistent/webview-ui".into(),
//!     ..Default::default()
//! };
//! let runner = MockRunner::new();
//! let verifier = EnvironmentVerifier::new(config, &runner);
//!
//! let err = verifier.verify(&mut MockUI::new()).unwrap_err();
//! assert!(matches!(err, LintcheckError::ConfigurationNotFound { .. }));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod verify;

pub use error::{LintcheckError, Result};
