// src/ports/notify.rs
use crate::application::Notifier;
use tracing::debug;

/// Prints notifications to stderr so they never mix with command output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        debug!(message, "Success notification");
        eprintln!("✔ {message}");
    }

    fn error(&self, message: &str) {
        debug!(message, "Error notification");
        eprintln!("✖ {message}");
    }
}
