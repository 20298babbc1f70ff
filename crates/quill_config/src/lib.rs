//! Parsing and validation of `quill.toml` diagnostics configuration.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`QuillConfig`] describing how diagnostics are routed between per-file
//! consumers and whether discarded diagnostics are logged.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
