//! Application layer: configuration for the front end.

pub mod config;

pub use config::PlayConfig;
