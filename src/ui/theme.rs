//! Visual theme and styling.

use console::Style;

/// Terminal styles used by [`TerminalUI`](super::TerminalUI).
#[derive(Debug, Clone)]
pub struct LintcheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for LintcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LintcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = LintcheckTheme::plain();
        let msg = theme.format_success("installed");
        assert_eq!(msg, "✓ installed");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = LintcheckTheme::plain();
        assert_eq!(theme.format_warning("missing"), "⚠ missing");
    }

    #[test]
    fn theme_formats_error() {
        let theme = LintcheckTheme::plain();
        assert_eq!(theme.format_error("failed"), "✗ failed");
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = LintcheckTheme::plain();
        assert_eq!(theme.format_header("lintcheck"), "lintcheck");
    }
}
