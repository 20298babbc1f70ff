//! Metadata carried alongside every diagnostic.

use serde::{Deserialize, Serialize};

/// Metadata describing a diagnostic beyond its kind, location and text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticInfo {
    /// The numeric identifier of the diagnostic in the compiler's catalog.
    pub id: u32,
    /// Set when the diagnostic was emitted as a child of another diagnostic.
    pub is_child_note: bool,
}

impl DiagnosticInfo {
    /// Creates metadata for a top-level diagnostic.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            is_child_note: false,
        }
    }

    /// Creates metadata for a note emitted as a child of another diagnostic.
    pub fn child_note(id: u32) -> Self {
        Self {
            id,
            is_child_note: true,
        }
    }
}
