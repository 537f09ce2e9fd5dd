//! Terminal console example.
//!
//! Reads commands from stdin and prints the console history to stdout.
//!
//! Run with: `cargo run --example terminal --features terminal`
//!
//! Try: `dump`, `show tickrate`, `set tickrate 128`, `set motd hello there`

use std::sync::{Arc, RwLock};

use bevy::prelude::*;
use bevy_var_console::prelude::*;

/// Server settings shared between game systems and the console.
#[derive(Resource, Clone)]
struct ServerSettings {
    tickrate: Arc<RwLock<u32>>,
    motd: Arc<RwLock<String>>,
    cheats: Arc<RwLock<bool>>,
}

fn main() {
    let settings = ServerSettings {
        tickrate: Arc::new(RwLock::new(64)),
        motd: Arc::new(RwLock::new(String::from("Welcome"))),
        cheats: Arc::new(RwLock::new(false)),
    };

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(DevConsolePlugin::new(ConsoleConfig::strict().history_size(100)))
        .insert_resource(settings)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut console: NonSendMut<DevConsole<'static>>, settings: Res<ServerSettings>) {
    console.add_variable("tickrate", Arc::clone(&settings.tickrate));
    console.add_variable("motd", Arc::clone(&settings.motd));
    console.add_variable("sv_cheats", Arc::clone(&settings.cheats));

    println!("Terminal console ready. Commands: set <name> <value>, show <name>, dump");
}
