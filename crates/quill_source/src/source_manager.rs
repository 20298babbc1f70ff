//! Central registry of all source buffers in a compilation session.

use crate::buffer_id::BufferId;
use crate::loc::SourceLoc;
use crate::range::CharRange;
use crate::resolved_location::ResolvedLocation;
use crate::resolver::LocationResolver;
use crate::source_buffer::SourceBuffer;
use quill_common::{Ident, Interner};
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Owns all loaded source text and lays it out in one global offset space.
///
/// Each buffer is placed after the previous buffer's end-of-buffer position,
/// with one unused position in between, so the inclusive ranges of two
/// distinct buffers never touch.
pub struct SourceManager {
    buffers: Vec<SourceBuffer>,
    interner: Interner,
    by_identifier: HashMap<Ident, BufferId>,
    next_start: u32,
}

impl SourceManager {
    /// Creates an empty source manager.
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            interner: Interner::new(),
            by_identifier: HashMap::new(),
            next_start: 0,
        }
    }

    /// Loads a file from the filesystem, registering it under its path.
    ///
    /// A file too large for the remaining offset space is an
    /// [`io::ErrorKind::InvalidData`] error.
    pub fn load_file(&mut self, path: &Path) -> Result<BufferId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        self.try_add_buffer(&path.to_string_lossy(), content)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{} is too large to load", path.display()),
                )
            })
    }

    /// Adds an in-memory buffer under `identifier` and returns its id.
    ///
    /// Adding a second buffer with the same identifier makes later lookups of
    /// that identifier return the new buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer does not fit in the remaining offset space; use
    /// [`try_add_buffer`](Self::try_add_buffer) to handle that case.
    pub fn add_buffer(&mut self, identifier: &str, content: String) -> BufferId {
        match self.try_add_buffer(identifier, content) {
            Some(id) => id,
            None => panic!("buffer '{identifier}' does not fit in the source offset space"),
        }
    }

    /// Adds an in-memory buffer, or returns `None` (adding nothing) if it
    /// does not fit in the remaining offset space.
    pub fn try_add_buffer(&mut self, identifier: &str, content: String) -> Option<BufferId> {
        let next_start = next_buffer_start(self.next_start, content.len())?;
        let id = BufferId::from_raw(u32::try_from(self.buffers.len()).ok()?);
        let ident = self.interner.get_or_intern(identifier);
        let start = SourceLoc::from_raw(self.next_start);
        self.buffers.push(SourceBuffer::new(id, ident, start, content));
        self.by_identifier.insert(ident, id);
        self.next_start = next_start;
        Some(id)
    }

    /// Returns the number of loaded buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Returns the [`SourceBuffer`] for the given [`BufferId`].
    ///
    /// # Panics
    ///
    /// Panics if the `BufferId` was not produced by this manager.
    pub fn buffer(&self, id: BufferId) -> &SourceBuffer {
        &self.buffers[id.as_raw() as usize]
    }

    /// Returns the identifier a buffer was registered under.
    pub fn identifier(&self, id: BufferId) -> &str {
        self.interner.resolve(self.buffer(id).identifier)
    }

    /// Returns the global location of `offset` within `buffer`.
    pub fn loc_for_offset(&self, buffer: BufferId, offset: u32) -> SourceLoc {
        self.buffer(buffer).loc_at(offset)
    }

    /// Finds the buffer whose range contains `loc`.
    pub fn buffer_for_loc(&self, loc: SourceLoc) -> Option<BufferId> {
        if loc.is_invalid() {
            return None;
        }
        let after = self
            .buffers
            .partition_point(|buffer| buffer.range().start <= loc);
        let candidate = self.buffers[..after].last()?;
        candidate.range().contains(loc).then_some(candidate.id)
    }

    /// Converts `loc` into 1-indexed (line, column) within its buffer.
    pub fn line_col(&self, loc: SourceLoc) -> Option<(u32, u32)> {
        let id = self.buffer_for_loc(loc)?;
        self.buffer(id).line_col(loc)
    }
}

/// Returns where the buffer after one of `len` bytes starting at `start`
/// begins: past its end-of-buffer position and a one-position gap.
///
/// The result stays below [`SourceLoc::INVALID`], so every location inside
/// the buffer is representable.
fn next_buffer_start(start: u32, len: usize) -> Option<u32> {
    let len = u32::try_from(len).ok()?;
    start
        .checked_add(len)?
        .checked_add(2)
        .filter(|next| *next < SourceLoc::INVALID.as_raw())
}

impl Default for SourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for SourceManager {
    fn buffer_id_for(&self, identifier: &str) -> Option<BufferId> {
        let ident = self.interner.get(identifier)?;
        self.by_identifier.get(&ident).copied()
    }

    fn range_of(&self, buffer: BufferId) -> CharRange {
        self.buffer(buffer).range()
    }

    fn resolve_location(&self, loc: SourceLoc) -> Option<ResolvedLocation> {
        let id = self.buffer_for_loc(loc)?;
        let (line, column) = self.buffer(id).line_col(loc)?;
        Some(ResolvedLocation {
            identifier: self.identifier(id).to_string(),
            line,
            column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut sm = SourceManager::new();
        let id = sm.add_buffer("main.ql", "hello world".to_string());
        assert_eq!(sm.buffer_id_for("main.ql"), Some(id));
        assert_eq!(sm.buffer(id).content, "hello world");
        assert_eq!(sm.identifier(id), "main.ql");
        assert_eq!(sm.buffer_count(), 1);
    }

    #[test]
    fn unknown_identifier() {
        let mut sm = SourceManager::new();
        assert_eq!(sm.buffer_id_for("main.ql"), None);
        sm.add_buffer("main.ql", String::new());
        assert_eq!(sm.buffer_id_for("other.ql"), None);
    }

    #[test]
    fn buffers_are_laid_out_disjointly() {
        let mut sm = SourceManager::new();
        let a = sm.add_buffer("a.ql", "0123456789".to_string());
        let b = sm.add_buffer("b.ql", "abc".to_string());
        let empty = sm.add_buffer("empty.ql", String::new());
        let c = sm.add_buffer("c.ql", "xyz".to_string());

        let ranges = [sm.range_of(a), sm.range_of(b), sm.range_of(empty), sm.range_of(c)];
        for pair in ranges.windows(2) {
            assert!(pair[0].end < pair[1].start);
            assert!(!pair[0].overlaps(&pair[1]));
        }
        assert_eq!(ranges[0].start, SourceLoc::from_raw(0));
        assert_eq!(ranges[0].end, SourceLoc::from_raw(10));
        assert_eq!(ranges[1].start, SourceLoc::from_raw(12));
    }

    #[test]
    fn buffer_for_loc_finds_owner() {
        let mut sm = SourceManager::new();
        let a = sm.add_buffer("a.ql", "aaaa".to_string());
        let b = sm.add_buffer("b.ql", "bbbb".to_string());

        assert_eq!(sm.buffer_for_loc(sm.loc_for_offset(a, 0)), Some(a));
        assert_eq!(sm.buffer_for_loc(sm.loc_for_offset(a, 4)), Some(a));
        assert_eq!(sm.buffer_for_loc(sm.loc_for_offset(b, 2)), Some(b));
        // the gap between buffers belongs to nobody
        assert_eq!(sm.buffer_for_loc(SourceLoc::from_raw(5)), None);
        assert_eq!(sm.buffer_for_loc(SourceLoc::from_raw(1000)), None);
        assert_eq!(sm.buffer_for_loc(SourceLoc::INVALID), None);
    }

    #[test]
    fn resolve_location_reports_line_and_column() {
        let mut sm = SourceManager::new();
        sm.add_buffer("a.ql", "first".to_string());
        let b = sm.add_buffer("b.ql", "abc\ndef\nghi".to_string());
        let loc = sm.loc_for_offset(b, 5);
        let resolved = sm.resolve_location(loc).unwrap();
        assert_eq!(resolved.identifier, "b.ql");
        assert_eq!((resolved.line, resolved.column), (2, 2));
        assert_eq!(format!("{resolved}"), "b.ql:2:2");
        assert_eq!(sm.line_col(loc), Some((2, 2)));
    }

    #[test]
    fn re_adding_identifier_points_at_new_buffer() {
        let mut sm = SourceManager::new();
        let first = sm.add_buffer("main.ql", "old".to_string());
        let second = sm.add_buffer("main.ql", "new".to_string());
        assert_ne!(first, second);
        assert_eq!(sm.buffer_id_for("main.ql"), Some(second));
    }

    #[test]
    fn next_start_leaves_gap_after_end_of_buffer() {
        assert_eq!(next_buffer_start(0, 10), Some(12));
        assert_eq!(next_buffer_start(12, 0), Some(14));
    }

    #[test]
    fn oversized_buffers_are_rejected_before_layout() {
        let limit = SourceLoc::INVALID.as_raw();
        assert_eq!(next_buffer_start(limit - 12, 10), None);
        assert_eq!(next_buffer_start(limit - 13, 10), Some(limit - 1));
        assert_eq!(next_buffer_start(u32::MAX - 1, 5), None);
        assert_eq!(next_buffer_start(0, u32::MAX as usize), None);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(next_buffer_start(0, u32::MAX as usize + 1), None);
    }

    #[test]
    fn full_offset_space_refuses_new_buffers() {
        let mut sm = SourceManager::new();
        sm.next_start = SourceLoc::INVALID.as_raw() - 4;
        assert_eq!(sm.try_add_buffer("late.ql", "abcd".to_string()), None);
        assert_eq!(sm.buffer_count(), 0);
        assert_eq!(sm.buffer_id_for("late.ql"), None);

        let id = sm.try_add_buffer("fits.ql", "a".to_string()).unwrap();
        assert_eq!(sm.range_of(id).end.as_raw(), SourceLoc::INVALID.as_raw() - 3);
    }

    #[test]
    #[should_panic(expected = "does not fit in the source offset space")]
    fn add_buffer_panics_when_space_is_exhausted() {
        let mut sm = SourceManager::new();
        sm.next_start = SourceLoc::INVALID.as_raw() - 1;
        sm.add_buffer("late.ql", "x".to_string());
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("input.ql");
        std::fs::write(&path, "fn main() {}").unwrap();

        let mut sm = SourceManager::new();
        let id = sm.load_file(&path).unwrap();
        assert_eq!(sm.buffer(id).content, "fn main() {}");
        assert_eq!(sm.buffer_id_for(&path.to_string_lossy()), Some(id));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut sm = SourceManager::new();
        let err = sm.load_file(&dir.path().join("missing.ql")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
