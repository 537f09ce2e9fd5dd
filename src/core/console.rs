//! The developer console.
//!
//! [`DevConsole`] combines the variable registry, the command line and the
//! output history into a single object driven by keystrokes.

use super::dispatch::dispatch;
use super::{
    Binding, CommandError, CommandLine, ConsoleConfig, History, VarBinding, VarSlot,
    VariableRegistry,
};

/// An in-process developer console.
///
/// Variables are registered by name and can then be inspected and changed
/// with `show <name>`, `dump` and `set <name> <value>`. All output goes to
/// the bounded [`History`].
///
/// The console is single-threaded. `'a` is the lifetime of storage borrowed
/// by registered variables: borrowed cells must outlive the console, while
/// shared handles (`Rc`, `Arc`) allow a `DevConsole<'static>`.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use bevy_var_console::core::DevConsole;
///
/// let lives = Cell::new(3i32);
/// let mut console = DevConsole::new();
/// console.add_variable("lives", &lives);
///
/// console.execute_line("set lives 9").unwrap();
/// assert_eq!(lives.get(), 9);
///
/// console.execute_line("show lives").unwrap();
/// assert_eq!(console.history().lines(), vec!["> set lives 9", "> show lives", "lives = 9"]);
/// ```
pub struct DevConsole<'a> {
    variables: VariableRegistry<'a>,
    history: History,
    command_line: CommandLine,
    config: ConsoleConfig,
}

impl Default for DevConsole<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DevConsole<'a> {
    /// Create a console with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    /// Create a console with the given configuration.
    pub fn with_config(config: ConsoleConfig) -> Self {
        Self {
            variables: VariableRegistry::new(),
            history: History::with_capacity(config.history_size),
            command_line: CommandLine::new(),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Register a variable that can be viewed and changed through the console.
    ///
    /// A variable already registered under `name` is replaced. Returns `true`
    /// if the name was new.
    pub fn add_variable<S: VarSlot + 'a>(&mut self, name: impl Into<Box<str>>, slot: S) -> bool {
        self.variables.add(name, Box::new(Binding::new(slot)))
    }

    /// Register a custom binding.
    pub fn add_binding(
        &mut self,
        name: impl Into<Box<str>>,
        binding: Box<dyn VarBinding + 'a>,
    ) -> bool {
        self.variables.add(name, binding)
    }

    /// Remove a variable. Removing an unknown name does nothing.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        self.variables.remove(name)
    }

    /// Get read-only access to the registered variables.
    pub fn variables(&self) -> &VariableRegistry<'a> {
        &self.variables
    }

    /// Get a variable's current value as text.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.variables.get(name).map(|binding| binding.to_text())
    }

    /// Set a variable from text without going through the command line.
    ///
    /// Nothing is written to the history.
    pub fn set_string(&self, name: &str, value: &str) -> Result<(), CommandError> {
        let binding = self
            .variables
            .get(name)
            .ok_or_else(|| CommandError::UnknownVariable(name.to_string()))?;
        binding.from_text(value).map_err(CommandError::InvalidValue)
    }

    /// Accept one keystroke.
    ///
    /// Printable characters are appended to the command line and backspace
    /// (`'\u{8}'`) deletes the last one. Other control characters are ignored.
    pub fn input(&mut self, c: char) {
        self.command_line.input(c);
    }

    /// Feed every character of `text` through [`DevConsole::input`].
    pub fn input_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.command_line.input(c));
    }

    /// Clear the contents of the command line.
    pub fn clear_command_line(&mut self) {
        self.command_line.clear();
    }

    /// The current command line, prefixed with the prompt.
    pub fn command_line(&self) -> String {
        self.command_line.render()
    }

    /// The current command line without the prompt.
    pub fn command_line_text(&self) -> &str {
        self.command_line.as_str()
    }

    /// Get the output history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Set the number of lines kept in the history, evicting the oldest lines if needed.
    pub fn set_history_size(&mut self, size: usize) {
        bevy::log::debug!("Console: history size {} -> {}", self.history.capacity(), size);
        self.history.set_capacity(size);
        self.config.history_size = size;
    }

    /// Write a line to the history.
    pub fn print(&mut self, line: impl Into<String>) {
        self.history.push(line);
    }

    /// Execute the command on the command line.
    ///
    /// Does nothing if the command line is empty. Otherwise the line is echoed
    /// to the history, the command runs, and the command line is cleared
    /// whether or not the command succeeded.
    ///
    /// Unknown commands return [`CommandError::UnknownCommand`] but only print
    /// a message when [`ConsoleConfig::report_unknown_commands`] is set.
    pub fn execute(&mut self) -> Result<(), CommandError> {
        if self.command_line.is_empty() {
            return Ok(());
        }

        self.history.push(self.command_line.render());
        let result = dispatch(
            self.command_line.as_str(),
            &self.variables,
            &mut self.history,
            &self.config,
        );
        self.command_line.clear();

        result
    }

    /// Replace the command line with `line` and execute it.
    ///
    /// The line is typed character by character, so control characters are
    /// filtered exactly as with [`DevConsole::input`]. Anything already on the
    /// command line is discarded.
    pub fn execute_line(&mut self, line: &str) -> Result<(), CommandError> {
        self.command_line.clear();
        self.input_str(line);
        self.execute()
    }
}
