//! Console events for communication between layers.
//!
//! Events are the primary mechanism for:
//! - Input handling -> Console: keystrokes and submitted lines
//! - Console -> UI/terminal: new history lines

use bevy::prelude::*;

/// Input sent to the console.
///
/// Events are applied in the order they were written.
///
/// # Examples
///
/// ```ignore
/// fn forward_keys(mut events: MessageWriter<ConsoleInputEvent>) {
///     events.write(ConsoleInputEvent::Char('d'));
///     events.write(ConsoleInputEvent::Execute);
///     events.write(ConsoleInputEvent::line("set sv_gravity 600"));
/// }
/// ```
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInputEvent {
    /// A single keystroke (backspace is `'\u{8}'`).
    Char(char),
    /// Execute the current command line.
    Execute,
    /// Clear the current command line.
    Clear,
    /// Replace the command line with this text and execute it.
    Line(String),
}

impl ConsoleInputEvent {
    /// Create a whole-line input event.
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }
}

/// Event sent for every line added to the console history.
///
/// # Examples
///
/// ```ignore
/// fn print_console(mut events: MessageReader<ConsoleOutputEvent>) {
///     for event in events.read() {
///         println!("{}", event.line);
///     }
/// }
/// ```
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOutputEvent {
    /// The history line.
    pub line: String,
}

impl ConsoleOutputEvent {
    /// Create a new output event.
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Check if this line echoes a submitted command.
    pub fn is_echo(&self) -> bool {
        self.line.starts_with(super::PROMPT)
    }
}

/// Plugin that registers all console events.
pub struct ConsoleEventsPlugin;

impl Plugin for ConsoleEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ConsoleInputEvent>()
            .add_message::<ConsoleOutputEvent>();
    }
}
