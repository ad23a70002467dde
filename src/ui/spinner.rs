//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::LintcheckTheme;
use super::SpinnerHandle;

/// A progress spinner shown while a command runs.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LintcheckTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: LintcheckTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show (for quiet modes).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: LintcheckTheme::plain(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_accepts_updates() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("Running root lint check");
        spinner.finish_success("root lint passed");
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn hidden_spinner_finishes_on_error() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.finish_error("root lint failed");
        assert!(spinner.bar.is_finished());
    }
}
