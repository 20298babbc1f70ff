//! The view of source buffers that diagnostic routing depends on.

use crate::buffer_id::BufferId;
use crate::loc::SourceLoc;
use crate::range::CharRange;
use crate::resolved_location::ResolvedLocation;

/// Maps buffer identifiers to buffers and buffers to their covering ranges.
///
/// Implementations must keep answers stable once buffers are loaded: a
/// consumer may cache the ranges it gets back for the rest of the run.
/// Raw locations are ordered by [`SourceLoc`]'s `Ord`.
pub trait LocationResolver {
    /// Returns the buffer registered under `identifier`, if it has been loaded.
    fn buffer_id_for(&self, identifier: &str) -> Option<BufferId>;

    /// Returns the range covered by `buffer`, end-of-buffer position included.
    fn range_of(&self, buffer: BufferId) -> CharRange;

    /// Resolves `loc` to a printable `identifier:line:column`, if possible.
    fn resolve_location(&self, _loc: SourceLoc) -> Option<ResolvedLocation> {
        None
    }
}
