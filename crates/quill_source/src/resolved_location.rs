//! Human-readable resolved source locations with line/column coordinates.

use std::fmt;

/// A location resolved to a buffer identifier and 1-indexed line/column.
///
/// Produced by [`LocationResolver::resolve_location`](crate::LocationResolver::resolve_location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// The identifier the buffer was registered under (usually its path).
    pub identifier: String,
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed).
    pub column: u32,
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.identifier, self.line, self.column)
    }
}
