//! Core console types.
//!
//! This module provides the fundamental building blocks:
//! - [`DevConsole`] - The console: variables, command line and history
//! - [`ConsoleValue`] - Text codec for bindable value types
//! - [`Binding`] / [`VarBinding`] - Typed and type-erased variable bindings
//! - [`VariableRegistry`] - Name-ordered storage for bindings
//! - [`History`] - Bounded output log
//! - [`CommandLine`] - Keystroke buffer
//! - [`parse_command`] - Command line parser
//! - Events for communication with the rest of the app

mod value;
mod binding;
mod registry;
mod history;
mod command_line;
mod config;
mod dispatch;
mod events;
mod console;

pub use value::{ConsoleValue, ParseValueError};
pub use binding::{Binding, VarBinding, VarSlot};
pub use registry::VariableRegistry;
pub use history::{History, DEFAULT_HISTORY_SIZE};
pub use command_line::{CommandLine, BACKSPACE, PROMPT};
pub use config::ConsoleConfig;
pub use dispatch::{parse_command, report_line, Command, CommandError, ParsedCommand};
pub use events::{ConsoleInputEvent, ConsoleOutputEvent, ConsoleEventsPlugin};
pub use console::DevConsole;
