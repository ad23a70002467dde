//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including the raw dependency listing.
    Verbose,
    /// Progress messages and captured lint output.
    #[default]
    Normal,
    /// Status messages without spinners.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows raw output of helper commands.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verbose_shows_command_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
        assert!(!OutputMode::Silent.shows_command_output());
    }

    #[test]
    fn output_mode_shows_spinners() {
        assert!(OutputMode::Verbose.shows_spinners());
        assert!(OutputMode::Normal.shows_spinners());
        assert!(!OutputMode::Quiet.shows_spinners());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
