//! Lint configuration discovery.

use std::path::{Path, PathBuf};

use crate::error::{LintcheckError, Result};

/// Find the first candidate config file that exists under `directory`.
pub fn discover_config(directory: &Path, candidates: &[String]) -> Result<PathBuf> {
    discover_config_with(directory, candidates, |path| path.exists())
}

/// Like [`discover_config`], with a caller-supplied existence probe.
///
/// Probing stops at the first hit; later candidates are never checked.
pub fn discover_config_with<F>(
    directory: &Path,
    candidates: &[String],
    mut exists: F,
) -> Result<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    for candidate in candidates {
        let path = directory.join(candidate);
        tracing::debug!(path = %path.display(), "Probing for lint config");
        if exists(&path) {
            return Ok(path);
        }
    }

    Err(LintcheckError::ConfigurationNotFound {
        directory: directory.to_path_buf(),
        candidates: candidates.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn candidates() -> Vec<String> {
        vec![".eslintrc.js".to_string(), ".eslintrc.json".to_string()]
    }

    #[test]
    fn finds_first_candidate() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".eslintrc.js"), "module.exports = {}").unwrap();
        fs::write(temp.path().join(".eslintrc.json"), "{}").unwrap();

        let found = discover_config(temp.path(), &candidates()).unwrap();
        assert_eq!(found, temp.path().join(".eslintrc.js"));
    }

    #[test]
    fn first_hit_skips_second_probe() {
        let mut probed = Vec::new();
        let found = discover_config_with(Path::new("web"), &candidates(), |p| {
            probed.push(p.to_path_buf());
            true
        })
        .unwrap();

        assert_eq!(found, Path::new("web").join(".eslintrc.js"));
        assert_eq!(probed, vec![Path::new("web").join(".eslintrc.js")]);
    }

    #[test]
    fn falls_back_to_second_candidate() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".eslintrc.json"), "{}").unwrap();

        let found = discover_config(temp.path(), &candidates()).unwrap();
        assert_eq!(found, temp.path().join(".eslintrc.json"));
    }

    #[test]
    fn neither_candidate_is_configuration_not_found() {
        let temp = TempDir::new().unwrap();
        // Other naming conventions are not recognized.
        fs::write(temp.path().join(".eslintrc.yml"), "").unwrap();
        fs::write(temp.path().join("eslint.config.js"), "").unwrap();

        let result = discover_config(temp.path(), &candidates());
        match result {
            Err(LintcheckError::ConfigurationNotFound {
                directory,
                candidates,
            }) => {
                assert_eq!(directory, temp.path());
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ConfigurationNotFound, got {:?}", other),
        }
    }

    #[test]
    fn missing_directory_is_configuration_not_found() {
        let temp = TempDir::new().unwrap();
        let result = discover_config(&temp.path().join("webview-ui"), &candidates());
        assert!(matches!(
            result,
            Err(LintcheckError::ConfigurationNotFound { .. })
        ));
    }
}
