//! Character ranges covering a span of the global offset space.

use crate::loc::SourceLoc;
use serde::{Deserialize, Serialize};

/// A range of locations from `start` to `end`.
///
/// For a buffer range, `end` is the end-of-buffer position: one past the
/// last character, which is still a location diagnostics can point at
/// (e.g. "expected `}` at end of file").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CharRange {
    /// The first location in the range.
    pub start: SourceLoc,
    /// The end-of-range location.
    pub end: SourceLoc,
}

impl CharRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `end` precedes `start`.
    pub fn new(start: SourceLoc, end: SourceLoc) -> Self {
        assert!(start <= end, "range end precedes its start");
        Self { start, end }
    }

    /// Returns the number of positions between `start` and `end`.
    pub fn len(&self) -> u32 {
        self.end.as_raw() - self.start.as_raw()
    }

    /// Returns `true` if `start == end`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `loc` lies within the range, counting both endpoints.
    pub fn contains(&self, loc: SourceLoc) -> bool {
        self.start <= loc && loc <= self.end
    }

    /// Returns `true` if some location is [contained](Self::contains) in both ranges.
    ///
    /// Endpoints count, so ranges that touch (`self.end == other.start`)
    /// overlap: the shared location would belong to both.
    pub fn overlaps(&self, other: &CharRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
