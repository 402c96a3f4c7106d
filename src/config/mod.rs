//! Configuration module

pub mod settings;

pub use settings::{BundleConfig, HttpConfig, LoggingConfig, ServerConfig, Settings};
