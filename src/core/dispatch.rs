//! Command parsing and dispatch.
//!
//! The command language is a single line of space-separated words with no
//! quoting or escaping:
//!
//! - `set <name> <value>`: parse `value` into the variable
//! - `show <name>`: print `name = value`
//! - `dump`: print every variable, in name order
//!
//! Only the space character separates words. Keywords are case-sensitive.

use std::fmt;

use super::{ConsoleConfig, History, ParseValueError, VarBinding, VariableRegistry};

/// Errors reported while executing a command line.
///
/// The `Display` form of each variant is the text written to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed command line.
    InvalidCommand,
    /// No variable with this name is registered.
    UnknownVariable(String),
    /// The keyword is not a known command.
    UnknownCommand(String),
    /// The value given to `set` could not be parsed.
    InvalidValue(ParseValueError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidCommand => write!(f, "Invalid command"),
            CommandError::UnknownVariable(_) => write!(f, "Unknown variable"),
            CommandError::UnknownCommand(_) => write!(f, "Unknown command"),
            CommandError::InvalidValue(_) => write!(f, "Invalid value"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

/// Built-in console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `set <name> <value>`
    Set,
    /// `show <name>`
    Show,
    /// `dump`
    Dump,
}

impl Command {
    /// Look up a command by its exact keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "set" => Some(Command::Set),
            "show" => Some(Command::Show),
            "dump" => Some(Command::Dump),
            _ => None,
        }
    }

    /// The keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Set => "set",
            Command::Show => "show",
            Command::Dump => "dump",
        }
    }
}

/// A command line split into its keyword and parameter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The first word.
    pub command: &'a str,
    /// Everything after the spaces following the first word, untouched.
    pub parameters: &'a str,
}

/// Split `line` into keyword and parameters.
///
/// Returns `None` if the line is empty or contains only spaces.
///
/// # Examples
///
/// ```
/// use bevy_var_console::core::parse_command;
///
/// let parsed = parse_command("  set   name  two words").unwrap();
/// assert_eq!(parsed.command, "set");
/// assert_eq!(parsed.parameters, "name  two words");
///
/// assert!(parse_command("   ").is_none());
/// ```
pub fn parse_command(line: &str) -> Option<ParsedCommand<'_>> {
    let rest = line.trim_start_matches(' ');
    if rest.is_empty() {
        return None;
    }

    let (command, parameters) = match rest.find(' ') {
        Some(end) => (&rest[..end], rest[end..].trim_start_matches(' ')),
        None => (rest, ""),
    };

    Some(ParsedCommand {
        command,
        parameters,
    })
}

/// Split `set` parameters into variable name and value.
///
/// The value is everything after the first run of spaces and may contain spaces.
fn split_assignment(parameters: &str) -> Option<(&str, &str)> {
    let end = parameters.find(' ')?;
    let value = parameters[end..].trim_start_matches(' ');
    if value.is_empty() {
        return None;
    }
    Some((&parameters[..end], value))
}

/// Format the report line for a variable.
pub fn report_line(name: &str, binding: &dyn VarBinding) -> String {
    format!("{} = {}", name, binding.to_text())
}

/// Execute the parameters of one command against the registry.
///
/// Output lines and error messages are pushed to `history`. The caller is
/// responsible for echoing the input line.
pub(crate) fn dispatch(
    line: &str,
    registry: &VariableRegistry<'_>,
    history: &mut History,
    config: &ConsoleConfig,
) -> Result<(), CommandError> {
    let Some(parsed) = parse_command(line) else {
        history.push(CommandError::InvalidCommand.to_string());
        return Err(CommandError::InvalidCommand);
    };

    let result = match Command::from_keyword(parsed.command) {
        Some(Command::Set) => do_set(parsed.parameters, registry, history, config),
        Some(Command::Show) => do_show(parsed.parameters, registry, history),
        Some(Command::Dump) => do_dump(registry, history),
        None => {
            let err = CommandError::UnknownCommand(parsed.command.to_string());
            if config.report_unknown_commands {
                history.push(err.to_string());
            }
            Err(err)
        }
    };

    bevy::log::trace!("Console: '{}' -> {:?}", parsed.command, result);
    result
}

fn do_set(
    parameters: &str,
    registry: &VariableRegistry<'_>,
    history: &mut History,
    config: &ConsoleConfig,
) -> Result<(), CommandError> {
    let Some((name, value)) = split_assignment(parameters) else {
        history.push(CommandError::InvalidCommand.to_string());
        return Err(CommandError::InvalidCommand);
    };

    let Some(binding) = registry.get(name) else {
        let err = CommandError::UnknownVariable(name.to_string());
        history.push(err.to_string());
        return Err(err);
    };

    match binding.from_text(value) {
        Ok(()) => {
            bevy::log::debug!("Console: {} = {}", name, binding.to_text());
            Ok(())
        }
        Err(err) if config.report_parse_errors => {
            let err = CommandError::InvalidValue(err);
            history.push(err.to_string());
            Err(err)
        }
        Err(err) => {
            bevy::log::debug!("Console: ignoring value for '{}': {}", name, err);
            Ok(())
        }
    }
}

fn do_show(
    parameters: &str,
    registry: &VariableRegistry<'_>,
    history: &mut History,
) -> Result<(), CommandError> {
    let Some(binding) = registry.get(parameters) else {
        let err = CommandError::UnknownVariable(parameters.to_string());
        history.push(err.to_string());
        return Err(err);
    };

    history.push(report_line(parameters, binding));
    Ok(())
}

fn do_dump(registry: &VariableRegistry<'_>, history: &mut History) -> Result<(), CommandError> {
    for (name, binding) in registry.iter() {
        history.push(report_line(name, binding));
    }
    Ok(())
}
