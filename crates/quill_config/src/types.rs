//! Configuration types deserialized from `quill.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `quill.toml`.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct QuillConfig {
    /// How diagnostics are distributed between per-file consumers.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Logging of diagnostics that no consumer keeps.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Routing settings for a compiler invocation that processes several inputs.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RoutingConfig {
    /// In batch mode only the primary files' diagnostics are reported;
    /// consumers registered for any other file are suppressed.
    #[serde(default)]
    pub batch_mode: bool,
    /// The files whose diagnostics are reported in batch mode.
    #[serde(default)]
    pub primary_files: Vec<String>,
}

impl RoutingConfig {
    /// Returns `true` if diagnostics located in `file` should be dropped.
    ///
    /// Catch-all registrations (an empty file name) are never suppressed.
    pub fn is_suppressed(&self, file: &str) -> bool {
        self.batch_mode && !file.is_empty() && !self.primary_files.iter().any(|p| p == file)
    }
}

/// Logging settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Emit a debug event for every diagnostic a null consumer discards.
    #[serde(default)]
    pub log_discarded: bool,
}
