//! Console configuration.

use super::history::DEFAULT_HISTORY_SIZE;

/// Settings for a [`DevConsole`](super::DevConsole).
///
/// The defaults reproduce the classic terse behavior: unknown commands and
/// unparsable values produce no output.
///
/// # Examples
///
/// ```
/// use bevy_var_console::core::ConsoleConfig;
///
/// let config = ConsoleConfig::default()
///     .history_size(100)
///     .report_unknown_commands(true);
/// assert_eq!(config.history_size, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum number of history lines.
    pub history_size: usize,
    /// Print "Unknown command" for unrecognized keywords.
    pub report_unknown_commands: bool,
    /// Print "Invalid value" when `set` cannot parse its value.
    pub report_parse_errors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            report_unknown_commands: false,
            report_parse_errors: false,
        }
    }
}

impl ConsoleConfig {
    /// Set the history size.
    pub fn history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Enable or disable "Unknown command" output.
    pub fn report_unknown_commands(mut self, enabled: bool) -> Self {
        self.report_unknown_commands = enabled;
        self
    }

    /// Enable or disable "Invalid value" output.
    pub fn report_parse_errors(mut self, enabled: bool) -> Self {
        self.report_parse_errors = enabled;
        self
    }

    /// Enable every optional diagnostic.
    pub fn strict() -> Self {
        Self::default()
            .report_unknown_commands(true)
            .report_parse_errors(true)
    }
}
