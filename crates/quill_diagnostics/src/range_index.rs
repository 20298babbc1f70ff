//! Sorted table of registered buffer ranges for location-to-consumer lookup.

use crate::error::RoutingError;
use quill_source::{CharRange, LocationResolver, SourceLoc};

/// One registered file's buffer range and the registration it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeEntry {
    /// The buffer range of the registered file.
    pub range: CharRange,
    /// Position of the owning registration in the router.
    pub registration: usize,
}

/// The outcome of trying to build a [`RangeIndex`].
#[derive(Debug)]
pub enum BuildOutcome {
    /// Every registered file resolved and the index is ready.
    Built(RangeIndex),
    /// None of the registered files has a buffer yet.
    NotLoaded,
}

/// Buffer ranges of all registered files, sorted by range end.
///
/// Ranges never overlap, so sorting by end yields the same order as sorting
/// by start; the end is what [`lookup`](Self::lookup) binary-searches on.
#[derive(Clone, Debug, Default)]
pub struct RangeIndex {
    entries: Vec<RangeEntry>,
}

impl RangeIndex {
    /// Builds the index for `files`, given as `(registration, file name)` pairs.
    ///
    /// Catch-all registrations (empty file names) are skipped. Buffers are
    /// expected to be loaded all at once: if no file resolves the outcome is
    /// [`BuildOutcome::NotLoaded`], but a mix of loaded and unloaded files is
    /// a contract violation, as are overlapping ranges.
    pub fn build<'a>(
        files: impl IntoIterator<Item = (usize, &'a str)>,
        resolver: &dyn LocationResolver,
    ) -> Result<BuildOutcome, RoutingError> {
        let mut resolved: Vec<(RangeEntry, &str)> = Vec::new();
        let mut first_missing = None;

        for (registration, file) in files {
            if file.is_empty() {
                continue;
            }
            match resolver.buffer_id_for(file) {
                Some(buffer) => {
                    let entry = RangeEntry {
                        range: resolver.range_of(buffer),
                        registration,
                    };
                    resolved.push((entry, file));
                }
                None => {
                    first_missing.get_or_insert(file);
                }
            }
        }

        if let Some(missing) = first_missing {
            if resolved.is_empty() {
                return Ok(BuildOutcome::NotLoaded);
            }
            return Err(RoutingError::PartiallyLoadedBuffers {
                missing: missing.to_string(),
                loaded: resolved.len(),
            });
        }

        resolved.sort_by_key(|(entry, _)| entry.range.end);

        if let Some(pair) = resolved
            .windows(2)
            .find(|pair| pair[0].0.range.overlaps(&pair[1].0.range))
        {
            return Err(RoutingError::OverlappingRanges {
                first: pair[0].1.to_string(),
                second: pair[1].1.to_string(),
            });
        }

        let entries = resolved.into_iter().map(|(entry, _)| entry).collect();
        Ok(BuildOutcome::Built(RangeIndex { entries }))
    }

    /// Returns the registration whose range contains `loc`, if any.
    ///
    /// Binary-searches for the first range whose end is not before `loc`,
    /// then checks that range actually contains it.
    pub fn lookup(&self, loc: SourceLoc) -> Option<usize> {
        let candidate = self.entries.partition_point(|entry| entry.range.end < loc);
        self.entries
            .get(candidate)
            .filter(|entry| entry.range.contains(loc))
            .map(|entry| entry.registration)
    }

    /// Returns the entries in lookup order.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no file is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
