//! A loaded source buffer with line-start indexing for line/column lookup.

use crate::buffer_id::BufferId;
use crate::loc::SourceLoc;
use crate::range::CharRange;
use quill_common::Ident;

/// A source buffer placed in the global offset space.
///
/// Stores the buffer's text along with precomputed line-start offsets so that
/// a location inside it can be turned into line/column coordinates quickly.
pub struct SourceBuffer {
    /// The unique identifier for this buffer within its [`SourceManager`](crate::SourceManager).
    pub id: BufferId,
    /// The interned identifier (path or synthetic name) the buffer was added under.
    pub identifier: Ident,
    /// The full text of the buffer.
    pub content: String,
    /// Global location of the first character.
    start: SourceLoc,
    /// Byte offsets of each line start, relative to `start` (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Creates a new buffer starting at `start` with precomputed line starts.
    pub fn new(id: BufferId, identifier: Ident, start: SourceLoc, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            id,
            identifier,
            content,
            start,
            line_starts,
        }
    }

    /// Returns the length of the buffer's text in bytes.
    ///
    /// [`SourceManager`](crate::SourceManager) only creates buffers whose
    /// length fits in the offset space, so the conversion is lossless.
    pub fn len(&self) -> u32 {
        self.content.len() as u32
    }

    /// Returns `true` if the buffer has no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the range from the first character to the end-of-buffer position.
    pub fn range(&self) -> CharRange {
        CharRange::new(self.start, self.start.advanced_by(self.len()))
    }

    /// Returns the global location of a byte offset within this buffer.
    ///
    /// # Panics
    ///
    /// Panics if `offset` lies beyond the end-of-buffer position.
    pub fn loc_at(&self, offset: u32) -> SourceLoc {
        assert!(offset <= self.len(), "offset {offset} is past the end of the buffer");
        self.start.advanced_by(offset)
    }

    /// Converts a location inside this buffer into 1-indexed (line, column).
    ///
    /// Returns `None` if the location is outside the buffer's range.
    pub fn line_col(&self, loc: SourceLoc) -> Option<(u32, u32)> {
        if !self.range().contains(loc) {
            return None;
        }
        let offset = loc.as_raw() - self.start.as_raw();
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        Some((line, col))
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffer(start: u32, content: &str) -> SourceBuffer {
        SourceBuffer::new(
            BufferId::from_raw(0),
            Ident::from_raw(0),
            SourceLoc::from_raw(start),
            content.to_string(),
        )
    }

    #[test]
    fn line_starts_computation() {
        let b = make_buffer(0, "abc\ndef\nghi");
        assert_eq!(b.line_starts, vec![0, 4, 8]);
    }

    #[test]
    fn range_includes_end_of_buffer() {
        let b = make_buffer(100, "hello");
        let range = b.range();
        assert_eq!(range.start, SourceLoc::from_raw(100));
        assert_eq!(range.end, SourceLoc::from_raw(105));
        assert_eq!(b.loc_at(5), range.end);
    }

    #[test]
    fn line_col_resolution() {
        let b = make_buffer(50, "abc\ndef\nghi");
        assert_eq!(b.line_col(b.loc_at(0)), Some((1, 1)));
        assert_eq!(b.line_col(b.loc_at(4)), Some((2, 1)));
        assert_eq!(b.line_col(b.loc_at(5)), Some((2, 2)));
        assert_eq!(b.line_col(b.loc_at(8)), Some((3, 1)));
        // end of buffer sits just after the last character
        assert_eq!(b.line_col(b.loc_at(11)), Some((3, 4)));
    }

    #[test]
    fn line_col_outside_buffer() {
        let b = make_buffer(50, "abc");
        assert_eq!(b.line_col(SourceLoc::from_raw(49)), None);
        assert_eq!(b.line_col(SourceLoc::from_raw(54)), None);
    }

    #[test]
    fn empty_buffer() {
        let b = make_buffer(0, "");
        assert!(b.is_empty());
        assert_eq!(b.line_starts, vec![0]);
        assert_eq!(b.line_col(b.loc_at(0)), Some((1, 1)));
    }

    #[test]
    #[should_panic(expected = "past the end of the buffer")]
    fn loc_past_end_panics() {
        make_buffer(0, "ab").loc_at(3);
    }
}
