//! Minimal headless console example.
//!
//! Demonstrates driving bevy_var_console programmatically without any UI.
//! Useful for testing or custom UI implementations.
//!
//! Run with: `cargo run --example minimal`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bevy::prelude::*;
use bevy_var_console::prelude::*;

/// Game state shared with the console.
struct Tweakables {
    gravity: Rc<Cell<f32>>,
    player_name: Rc<RefCell<String>>,
}

fn main() {
    let tweakables = Tweakables {
        gravity: Rc::new(Cell::new(800.0)),
        player_name: Rc::new(RefCell::new(String::from("Player"))),
    };

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(DevConsolePlugin::default())
        .insert_non_send_resource(tweakables)
        .add_systems(Startup, setup)
        .add_systems(Update, process_outputs)
        .add_systems(Update, send_test_commands.run_if(run_once))
        .run();
}

fn setup(mut console: NonSendMut<DevConsole<'static>>, tweakables: NonSend<Tweakables>) {
    console.add_variable("sv_gravity", Rc::clone(&tweakables.gravity));
    console.add_variable("name", Rc::clone(&tweakables.player_name));

    println!("Console initialized. Registered: sv_gravity, name");
}

/// Send some test commands programmatically.
fn send_test_commands(mut events: MessageWriter<ConsoleInputEvent>) {
    println!("\n--- Sending test commands ---");

    // Query a variable
    events.write(ConsoleInputEvent::line("show sv_gravity"));

    // Set variables
    events.write(ConsoleInputEvent::line("set sv_gravity 1000"));
    events.write(ConsoleInputEvent::line("set name Gordon Freeman"));

    // Type a command key by key, with a typo fixed by backspace
    for c in "dumo\u{8}p".chars() {
        events.write(ConsoleInputEvent::Char(c));
    }
    events.write(ConsoleInputEvent::Execute);

    // Errors
    events.write(ConsoleInputEvent::line("set sv_gravity"));
    events.write(ConsoleInputEvent::line("show sv_friction"));
}

/// Print console output events.
fn process_outputs(mut events: MessageReader<ConsoleOutputEvent>) {
    for event in events.read() {
        println!("{}", event.line);
    }
}
