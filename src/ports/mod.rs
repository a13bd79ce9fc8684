// src/ports/mod.rs
pub mod html;
pub mod notify;
pub mod text;

pub use html::HtmlPresenter;
pub use notify::ConsoleNotifier;
pub use text::TextPresenter;
