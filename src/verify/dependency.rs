//! Direct dependency check.

use serde::Serialize;
use std::path::Path;

use crate::error::{describe_exit, LintcheckError, Result};
use crate::shell::{CommandResult, CommandRunner};

/// Whether the required package showed up in the dependency listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyStatus {
    Installed,
    /// Soft failure: reported as a warning, the run continues.
    NotListed,
}

impl DependencyStatus {
    /// Whether the package was found.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

/// Run the listing command inside `directory` and search its stdout.
///
/// Returns the status along with the raw listing. A listing command that
/// cannot start or exits non-zero aborts with
/// [`LintcheckError::DependencyToolFailure`], even though a missing package
/// on its own is only a warning.
pub fn check_dependency(
    runner: &dyn CommandRunner,
    directory: &Path,
    listing_command: &str,
    package: &str,
) -> Result<(DependencyStatus, String)> {
    let result = runner
        .run(listing_command, Some(directory))
        .map_err(|e| {
            tracing::debug!(error = %e, "Dependency listing did not start");
            LintcheckError::DependencyToolFailure {
                command: listing_command.to_string(),
                code: None,
                message: "could not start the shell".to_string(),
            }
        })?;

    if !result.success {
        return Err(listing_failure(listing_command, &result));
    }

    let status = if result.stdout.contains(package) {
        DependencyStatus::Installed
    } else {
        DependencyStatus::NotListed
    };

    tracing::debug!(%package, ?status, "Dependency check finished");
    Ok((status, result.stdout))
}

fn listing_failure(command: &str, result: &CommandResult) -> LintcheckError {
    let output = result.combined_output();
    let message = if output.is_empty() {
        describe_exit(&result.exit_code)
    } else {
        output
    };

    LintcheckError::DependencyToolFailure {
        command: command.to_string(),
        code: result.exit_code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockRunner, COMMAND_NOT_FOUND};
    use std::path::PathBuf;

    const LISTING: &str = "npm list --depth 0";
    const PACKAGE: &str = "eslint-config-react-app";

    #[test]
    fn listed_package_is_installed() {
        let runner = MockRunner::new().with_success(
            LISTING,
            "webview-ui@0.1.0\n├── eslint-config-react-app@7.0.1\n└── react@18.2.0\n",
        );

        let (status, listing) =
            check_dependency(&runner, Path::new("web"), LISTING, PACKAGE).unwrap();

        assert_eq!(status, DependencyStatus::Installed);
        assert!(listing.contains("react@18.2.0"));
    }

    #[test]
    fn substring_match_counts() {
        let runner =
            MockRunner::new().with_success(LISTING, "@scope/eslint-config-react-app-extra@1.0.0");

        let (status, _) = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE).unwrap();
        assert!(status.is_installed());
    }

    #[test]
    fn absent_package_is_not_listed() {
        let runner =
            MockRunner::new().with_success(LISTING, "webview-ui@0.1.0\n└── react@18.2.0\n");

        let (status, _) = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE).unwrap();
        assert_eq!(status, DependencyStatus::NotListed);
    }

    #[test]
    fn listing_runs_in_target_directory() {
        let runner = MockRunner::new().with_success(LISTING, "");
        check_dependency(&runner, Path::new("webview-ui"), LISTING, PACKAGE).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cwd, Some(PathBuf::from("webview-ui")));
    }

    #[test]
    fn missing_package_manager_is_tool_failure() {
        let runner = MockRunner::new();

        let result = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE);
        match result {
            Err(LintcheckError::DependencyToolFailure { code, message, .. }) => {
                assert_eq!(code, Some(COMMAND_NOT_FOUND));
                assert!(message.contains("command not found"));
            }
            other => panic!("expected DependencyToolFailure, got {:?}", other),
        }
    }

    #[test]
    fn non_zero_listing_is_tool_failure_even_if_package_present() {
        let runner = MockRunner::new().with_exit(
            LISTING,
            1,
            "└── eslint-config-react-app@7.0.1",
            "npm ERR! extraneous: left-pad@1.3.0",
        );

        let result = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE);
        assert!(matches!(
            result,
            Err(LintcheckError::DependencyToolFailure { code: Some(1), .. })
        ));
    }

    #[test]
    fn spawn_error_is_tool_failure() {
        let runner = MockRunner::new().with_spawn_error(LISTING);

        let err = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE).unwrap_err();
        assert!(matches!(
            err,
            LintcheckError::DependencyToolFailure { code: None, .. }
        ));
        assert_eq!(err.to_string().matches("Command failed").count(), 1);
    }

    #[test]
    fn silent_listing_failure_names_exit_code() {
        let runner = MockRunner::new().with_exit(LISTING, 3, "", "");

        let err = check_dependency(&runner, Path::new("web"), LISTING, PACKAGE).unwrap_err();
        assert!(err.to_string().ends_with(": exit code 3"));
    }
}
