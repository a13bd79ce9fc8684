// src/infrastructure/mod.rs
pub mod config;
pub mod notehub;
pub mod renderer;

pub use config::Config;
pub use notehub::NotehubClient;
