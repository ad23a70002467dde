//! Verifier configuration schema.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock ESLint check against `./webview-ui/`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory verified when none is given on the command line.
pub const DEFAULT_TARGET_DIR: &str = "./webview-ui/";

/// Package that must appear in the direct dependency listing.
pub const DEFAULT_REQUIRED_PACKAGE: &str = "eslint-config-react-app";

/// Command listing the target's direct dependencies.
pub const DEFAULT_DEPENDENCY_LISTING: &str = "npm list --depth 0";

/// Root configuration for a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Project root to verify.
    pub target_dir: PathBuf,

    /// Lint configuration filenames, probed in order. First match wins.
    pub config_candidates: Vec<String>,

    /// Package name searched for (as a substring) in the dependency listing.
    pub required_package: String,

    /// Command whose output is the dependency listing. Runs inside `target_dir`.
    pub dependency_listing: String,

    /// Lint commands, executed in order.
    pub lint_runs: Vec<LintRunConfig>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            config_candidates: vec![".eslintrc.js".to_string(), ".eslintrc.json".to_string()],
            required_package: DEFAULT_REQUIRED_PACKAGE.to_string(),
            dependency_listing: DEFAULT_DEPENDENCY_LISTING.to_string(),
            lint_runs: vec![
                LintRunConfig {
                    name: "root".to_string(),
                    command: "eslint src --ext ts".to_string(),
                    scope: LintScope::Caller,
                },
                LintRunConfig {
                    name: "webview".to_string(),
                    command: "npm run lint".to_string(),
                    scope: LintScope::Target,
                },
            ],
        }
    }
}

/// A single lint command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintRunConfig {
    /// Short label used in progress messages.
    pub name: String,

    /// Shell command line.
    pub command: String,

    /// Which directory the command runs in.
    #[serde(default)]
    pub scope: LintScope,
}

/// Working directory for a lint command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintScope {
    /// Inherit the verifier's own working directory; the target is ignored.
    Caller,
    /// Run inside the target directory.
    #[default]
    Target,
}
