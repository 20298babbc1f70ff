//! Raw positions in the global source offset space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw position in the global offset space shared by all loaded buffers.
///
/// Locations are totally ordered by their raw offset. Two locations in
/// different buffers compare by where those buffers were placed, which is
/// what the diagnostic router relies on to binary-search buffer ranges.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLoc(u32);

impl SourceLoc {
    /// The location used when a diagnostic has no known position.
    pub const INVALID: SourceLoc = SourceLoc(u32::MAX);

    /// Creates a location from a raw global offset.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw global offset.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is [`SourceLoc::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Returns `true` if this is [`SourceLoc::INVALID`].
    pub fn is_invalid(self) -> bool {
        !self.is_valid()
    }

    /// Returns the location `delta` positions after this one.
    ///
    /// # Panics
    ///
    /// Panics if the result would overflow or land on [`SourceLoc::INVALID`].
    pub fn advanced_by(self, delta: u32) -> SourceLoc {
        match self.0.checked_add(delta) {
            Some(raw) if raw != Self::INVALID.0 => SourceLoc(raw),
            _ => panic!("source location {} + {delta} is out of range", self.0),
        }
    }
}

impl Default for SourceLoc {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "SourceLoc({})", self.0)
        } else {
            write!(f, "SourceLoc(<invalid>)")
        }
    }
}
