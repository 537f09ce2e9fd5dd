//! A tiny in-process developer console.
//!
//! bevy_var_console lets a developer inspect and change live program
//! variables from a console while the application runs:
//!
//! - **Variables**: any `bool`, `char`, integer, float or `String` stored in a
//!   `Cell`, `RefCell`, `Mutex` or `RwLock` can be bound under a name
//! - **Commands**: `set <name> <value>`, `show <name>`, `dump`
//! - **History**: a bounded log of echoed commands and results
//!
//! The [`core`] module has no engine coupling and can be embedded anywhere.
//! [`DevConsolePlugin`] wires one console into a Bevy app.
//!
//! # Features
//!
//! - `terminal`: stdin/stdout backend for dedicated servers
//! - `log-capture`: mirror log events into the console history
//! - `full`: Enable log-capture
//!
//! # Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use std::cell::Cell;
//!
//! use bevy::prelude::*;
//! use bevy_var_console::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(DevConsolePlugin::default())
//!         .add_systems(Startup, setup_console)
//!         .run();
//! }
//!
//! fn setup_console(mut console: NonSendMut<DevConsole<'static>>) {
//!     let gravity = Rc::new(Cell::new(800.0f32));
//!     console.add_variable("sv_gravity", Rc::clone(&gravity));
//! }
//! ```

use bevy::prelude::*;

// Core module (always available, no engine coupling beyond logging)
pub mod core;

// Re-export core types at crate root for convenience
pub use core::{
    DevConsole, ConsoleConfig,
    ConsoleValue, ParseValueError,
    Binding, VarBinding, VarSlot,
    VariableRegistry, History, CommandLine,
    Command, CommandError, ParsedCommand, parse_command,
    ConsoleInputEvent, ConsoleOutputEvent, ConsoleEventsPlugin,
};

// Log capture (feature-gated)
#[cfg(feature = "log-capture")]
pub mod logging;

// Terminal backend (feature-gated)
#[cfg(feature = "terminal")]
pub mod terminal;

#[cfg(feature = "terminal")]
pub use terminal::{TerminalPlugin, TerminalConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DevConsole, ConsoleConfig, ConsoleValue,
        CommandError,
        ConsoleInputEvent, ConsoleOutputEvent,
    };
    pub use crate::DevConsolePlugin;
}

/// Main console plugin.
///
/// Inserts a [`DevConsole<'static>`](DevConsole) as a non-send resource, applies
/// [`ConsoleInputEvent`]s to it every frame and sends a [`ConsoleOutputEvent`]
/// for each line added to its history.
///
/// # Configuration
///
/// ```ignore
/// DevConsolePlugin::new(ConsoleConfig::default().history_size(200))
/// ```
#[derive(Default)]
pub struct DevConsolePlugin {
    /// Configuration for the console instance.
    pub config: ConsoleConfig,
}

impl DevConsolePlugin {
    /// Create the plugin with a custom configuration.
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }
}

impl Plugin for DevConsolePlugin {
    fn build(&self, app: &mut App) {
        app.insert_non_send_resource(DevConsole::<'static>::with_config(self.config))
            .init_resource::<OutputCursor>()
            .add_plugins(core::ConsoleEventsPlugin);

        // 1. apply_console_input: Feed keystrokes and lines, execute commands
        // 2. publish_console_output: Send every history line added since last frame
        app.add_systems(Update, (
            apply_console_input,
            publish_console_output,
        ).chain());

        // Terminal backend (feature-gated)
        #[cfg(feature = "terminal")]
        {
            app.add_plugins(terminal::TerminalPlugin);
        }
    }
}

/// Number of history lines already published as output events.
#[derive(Resource, Default)]
struct OutputCursor(u64);

/// System that applies input events to the console in order.
fn apply_console_input(
    mut console: NonSendMut<DevConsole<'static>>,
    mut input_events: MessageReader<ConsoleInputEvent>,
) {
    for event in input_events.read() {
        let result = match event {
            ConsoleInputEvent::Char(c) => {
                console.input(*c);
                Ok(())
            }
            ConsoleInputEvent::Clear => {
                console.clear_command_line();
                Ok(())
            }
            ConsoleInputEvent::Execute => console.execute(),
            ConsoleInputEvent::Line(line) => console.execute_line(line),
        };

        if let Err(err) = result {
            debug!("Console: command failed: {:?}", err);
        }
    }
}

/// System that sends new history lines as output events.
fn publish_console_output(
    console: NonSend<DevConsole<'static>>,
    mut cursor: ResMut<OutputCursor>,
    mut output_events: MessageWriter<ConsoleOutputEvent>,
) {
    let history = console.history();
    if history.total_pushed() == cursor.0 {
        return;
    }
    for line in history.since(cursor.0) {
        output_events.write(ConsoleOutputEvent::new(line));
    }
    cursor.0 = history.total_pushed();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Input queued by a test, written as messages in `PreUpdate`.
    #[derive(Resource, Default)]
    struct PendingInput(Vec<ConsoleInputEvent>);

    /// Output lines collected in `PostUpdate`.
    #[derive(Resource, Default)]
    struct CapturedOutput(Vec<String>);

    fn send_pending_input(
        mut pending: ResMut<PendingInput>,
        mut events: MessageWriter<ConsoleInputEvent>,
    ) {
        for event in pending.0.drain(..) {
            events.write(event);
        }
    }

    fn capture_output(
        mut events: MessageReader<ConsoleOutputEvent>,
        mut captured: ResMut<CapturedOutput>,
    ) {
        for event in events.read() {
            captured.0.push(event.line.clone());
        }
    }

    fn test_app(config: ConsoleConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(DevConsolePlugin::new(config));
        app.init_resource::<PendingInput>()
            .init_resource::<CapturedOutput>()
            .add_systems(PreUpdate, send_pending_input)
            .add_systems(PostUpdate, capture_output);
        app
    }

    fn queue(app: &mut App, event: ConsoleInputEvent) {
        app.world_mut().resource_mut::<PendingInput>().0.push(event);
    }

    fn captured(app: &App) -> Vec<String> {
        app.world().resource::<CapturedOutput>().0.clone()
    }

    #[test]
    fn test_line_input_sets_variable() {
        let mut app = test_app(ConsoleConfig::default());
        let gravity = Rc::new(Cell::new(800.0f32));
        app.world_mut()
            .non_send_resource_mut::<DevConsole<'static>>()
            .add_variable("sv_gravity", Rc::clone(&gravity));

        queue(&mut app, ConsoleInputEvent::line("set sv_gravity 600"));
        queue(&mut app, ConsoleInputEvent::line("show sv_gravity"));
        app.update();

        assert_eq!(gravity.get(), 600.0);
        assert_eq!(
            captured(&app),
            vec!["> set sv_gravity 600", "> show sv_gravity", "sv_gravity = 600"]
        );
    }

    #[test]
    fn test_keystrokes_applied_in_order() {
        let mut app = test_app(ConsoleConfig::default());
        let lives = Rc::new(Cell::new(3i32));
        app.world_mut()
            .non_send_resource_mut::<DevConsole<'static>>()
            .add_variable("lives", Rc::clone(&lives));

        for c in "set lives 99\u{8}".chars() {
            queue(&mut app, ConsoleInputEvent::Char(c));
        }
        queue(&mut app, ConsoleInputEvent::Execute);
        queue(&mut app, ConsoleInputEvent::Char('x'));
        app.update();

        assert_eq!(lives.get(), 9);
        let console = app.world().non_send_resource::<DevConsole<'static>>();
        assert_eq!(console.command_line(), "> x");
    }

    #[test]
    fn test_clear_event() {
        let mut app = test_app(ConsoleConfig::default());
        for c in "dump".chars() {
            queue(&mut app, ConsoleInputEvent::Char(c));
        }
        queue(&mut app, ConsoleInputEvent::Clear);
        queue(&mut app, ConsoleInputEvent::Execute);
        app.update();

        assert!(captured(&app).is_empty());
    }

    #[test]
    fn test_output_published_once() {
        let mut app = test_app(ConsoleConfig::default());
        queue(&mut app, ConsoleInputEvent::line("show missing"));
        app.update();
        app.update();
        app.update();

        assert_eq!(captured(&app), vec!["> show missing", "Unknown variable"]);
    }

    #[test]
    fn test_printed_lines_published() {
        let mut app = test_app(ConsoleConfig::default());
        app.update();

        app.world_mut()
            .non_send_resource_mut::<DevConsole<'static>>()
            .print("map loaded");
        app.update();

        assert_eq!(captured(&app), vec!["map loaded"]);
    }

    #[test]
    fn test_plugin_config() {
        let mut app = test_app(ConsoleConfig::strict().history_size(2));
        queue(&mut app, ConsoleInputEvent::line("teleport 1 2 3"));
        app.update();

        let console = app.world().non_send_resource::<DevConsole<'static>>();
        assert_eq!(console.history().capacity(), 2);
        assert_eq!(console.history().lines(), vec!["> teleport 1 2 3", "Unknown command"]);
    }
}
