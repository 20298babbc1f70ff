//! Typed arguments substituted into a diagnostic's format string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single argument to a diagnostic's format string.
///
/// Consumers decide how to substitute arguments; routing carries them
/// through untouched.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DiagnosticArgument {
    /// Free-form text.
    String(String),
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer.
    Unsigned(u64),
    /// A source-level identifier, usually printed quoted.
    Identifier(String),
}

impl fmt::Display for DiagnosticArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArgument::String(s) => write!(f, "{s}"),
            DiagnosticArgument::Integer(n) => write!(f, "{n}"),
            DiagnosticArgument::Unsigned(n) => write!(f, "{n}"),
            DiagnosticArgument::Identifier(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<&str> for DiagnosticArgument {
    fn from(s: &str) -> Self {
        DiagnosticArgument::String(s.to_string())
    }
}

impl From<i64> for DiagnosticArgument {
    fn from(n: i64) -> Self {
        DiagnosticArgument::Integer(n)
    }
}

impl From<u64> for DiagnosticArgument {
    fn from(n: u64) -> Self {
        DiagnosticArgument::Unsigned(n)
    }
}
