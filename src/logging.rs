//! Custom [LogPlugin](bevy::log::LogPlugin) functionality.
//!
//! Mirrors log events into the console history so they show up next to
//! command output.

use bevy::log::{BoxedLayer, Level};
use bevy::prelude::*;
use std::sync::mpsc;
use tracing::Subscriber;
use tracing_subscriber::field::Visit;
use tracing_subscriber::Layer;

use crate::core::DevConsole;

/// A function that feeds log events into the developer console via
/// [`LogPlugin::custom_layer`](bevy::log::LogPlugin::custom_layer).
///
/// # Examples
///
/// ```ignore
/// App::new()
///     .add_plugins(DefaultPlugins.set(LogPlugin {
///         custom_layer: bevy_var_console::logging::custom_log_layer,
///         ..default()
///     }))
///     .add_plugins(DevConsolePlugin::default());
/// ```
pub fn custom_log_layer(app: &mut App) -> Option<BoxedLayer> {
    Some(Box::new(create_custom_log_layer(app)))
}

fn create_custom_log_layer(app: &mut App) -> LogCaptureLayer {
    let (sender, receiver) = mpsc::channel();
    app.insert_non_send_resource(CapturedLogLines(receiver));
    app.add_systems(PostUpdate, transfer_log_lines);

    LogCaptureLayer { sender }
}

/// Format a captured log event as a history line.
pub fn format_log_line(level: Level, message: &str) -> String {
    format!("[{}] {}", level, message)
}

/// Moves captured log lines from [`CapturedLogLines`] into the console history.
///
/// Lines are dropped if no console has been inserted yet.
fn transfer_log_lines(
    receiver: NonSend<CapturedLogLines>,
    console: Option<NonSendMut<DevConsole<'static>>>,
) {
    let Some(mut console) = console else {
        // Drain anyway so the channel does not grow without bound.
        receiver.0.try_iter().for_each(drop);
        return;
    };
    for line in receiver.0.try_iter() {
        console.print(line);
    }
}

/// This struct temporarily stores formatted log lines before they are
/// written to the console by [`transfer_log_lines`].
struct CapturedLogLines(mpsc::Receiver<String>);

/// A [`Layer`] that captures log events and sends them to [`CapturedLogLines`].
struct LogCaptureLayer {
    sender: mpsc::Sender<String>,
}

impl<S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>> Layer<S>
    for LogCaptureLayer
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut message = None;
        event.record(&mut LogEventVisitor(&mut message));
        if let Some(message) = message {
            let level = *event.metadata().level();
            let _ = self.sender.send(format_log_line(level, &message));
        }
    }
}

/// A [`Visit`]or that records log messages that are transferred to [`LogCaptureLayer`].
struct LogEventVisitor<'a>(&'a mut Option<String>);

impl Visit for LogEventVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        // Only log out messages
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_line() {
        assert_eq!(format_log_line(Level::WARN, "low memory"), "[WARN] low memory");
        assert_eq!(format_log_line(Level::INFO, "ready"), "[INFO] ready");
    }

    #[test]
    fn test_transfer_log_lines() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(crate::DevConsolePlugin::default());

        let layer = create_custom_log_layer(&mut app);
        let _ = layer.sender.send(format_log_line(Level::ERROR, "disk full"));
        app.update();

        let console = app.world().non_send_resource::<DevConsole<'static>>();
        assert_eq!(console.history().lines(), vec!["[ERROR] disk full"]);
    }
}
