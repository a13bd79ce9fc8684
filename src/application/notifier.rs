// src/application/notifier.rs

/// User-facing notifications, the terminal counterpart of toast messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
