//! Configuration file loading.

use crate::config::schema::VerifierConfig;
use crate::error::{LintcheckError, Result};
use std::fs;
use std::path::Path;

/// Load a verifier config from a YAML file.
///
/// Fields missing from the file keep their defaults.
pub fn load_config(path: &Path) -> Result<VerifierConfig> {
    if !path.exists() {
        return Err(LintcheckError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Resolve the effective config: an optional file, then an optional target override.
pub fn resolve_config(
    config_path: Option<&Path>,
    target_dir: Option<&Path>,
) -> Result<VerifierConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => VerifierConfig::default(),
    };

    if let Some(dir) = target_dir {
        config.target_dir = dir.to_path_buf();
    }

    tracing::debug!(target_dir = %config.target_dir.display(), "Resolved verifier config");
    Ok(config)
}

fn parse_config(content: &str, path: &Path) -> Result<VerifierConfig> {
    // An empty file is a valid "all defaults" config; serde_yaml rejects it.
    if content.trim().is_empty() {
        return Ok(VerifierConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LintcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
