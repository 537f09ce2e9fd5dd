//! The in-progress command line.

/// Prompt marker shown before the command line and echoed commands.
pub const PROMPT: &str = "> ";

/// Backspace control character.
pub const BACKSPACE: char = '\u{8}';

/// Accumulates typed characters until the line is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
}

impl CommandLine {
    /// Create an empty command line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one keystroke.
    ///
    /// Printable characters are appended, [`BACKSPACE`] removes the last
    /// character, and every other control character is ignored.
    pub fn input(&mut self, c: char) {
        if c == BACKSPACE {
            self.text.pop();
        } else if !c.is_control() {
            self.text.push(c);
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Get the raw contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if nothing has been typed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Contents prefixed with the [`PROMPT`].
    pub fn render(&self) -> String {
        format!("{PROMPT}{}", self.text)
    }
}
