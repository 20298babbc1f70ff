//! Routing diagnostics to the consumer of the file they are located in.

use crate::argument::DiagnosticArgument;
use crate::consumer::DiagnosticConsumer;
use crate::error::RoutingError;
use crate::info::DiagnosticInfo;
use crate::kind::DiagnosticKind;
use crate::range_index::{BuildOutcome, RangeIndex};
use quill_config::RoutingConfig;
use quill_source::{LocationResolver, SourceLoc};
use std::collections::HashSet;

/// What a registered file's diagnostics are sent to.
pub enum SinkSlot {
    /// A consumer owned by the router for its whole lifetime.
    Owned(Box<dyn DiagnosticConsumer>),
    /// Diagnostics located in this file are dropped, and broadcasts skip it.
    Suppressed,
}

impl SinkSlot {
    /// Boxes `consumer` into an owned slot.
    pub fn owned(consumer: impl DiagnosticConsumer + 'static) -> Self {
        SinkSlot::Owned(Box::new(consumer))
    }

    /// Returns `true` for [`SinkSlot::Suppressed`].
    pub fn is_suppressed(&self) -> bool {
        matches!(self, SinkSlot::Suppressed)
    }
}

/// Position of a registration within its router.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SinkIndex(pub usize);

/// Where a diagnostic goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Target {
    /// Every registered, non-suppressed consumer.
    #[default]
    Broadcast,
    /// Exactly one consumer.
    Specific(SinkIndex),
    /// Nobody: the diagnostic belongs to a suppressed file.
    Suppress,
}

struct Registration {
    file: String,
    slot: SinkSlot,
}

enum IndexState {
    Unbuilt,
    Built(RangeIndex),
}

/// Routes each diagnostic to the consumer registered for its file.
///
/// Registrations are fixed at construction. A registration with an empty
/// file name is a catch-all that only receives broadcasts. The buffer range
/// index is built lazily, the first time a diagnostic needs it, so the router
/// can be set up before any source buffer is loaded; once built it is kept
/// for the router's lifetime.
///
/// The router is not meant to be shared between threads: dispatch mutates
/// the index cache and the note cursor.
pub struct FileSpecificRouter {
    registrations: Vec<Registration>,
    index: IndexState,
    target_for_notes: Target,
}

impl FileSpecificRouter {
    /// Creates a router from `(file, slot)` pairs, in delivery order.
    ///
    /// Fails if `pairs` is empty or two pairs name the same non-empty file.
    pub fn new(pairs: Vec<(String, SinkSlot)>) -> Result<Self, RoutingError> {
        if pairs.is_empty() {
            return Err(RoutingError::NoConsumers);
        }
        let mut seen = HashSet::new();
        for (file, _) in &pairs {
            // any number of catch-alls is fine
            if !file.is_empty() && !seen.insert(file.as_str()) {
                return Err(RoutingError::DuplicateFile(file.clone()));
            }
        }
        let registrations = pairs
            .into_iter()
            .map(|(file, slot)| Registration { file, slot })
            .collect();
        Ok(Self {
            registrations,
            index: IndexState::Unbuilt,
            target_for_notes: Target::Broadcast,
        })
    }

    /// Creates a router whose consumers for files suppressed by `config`
    /// are replaced with [`SinkSlot::Suppressed`].
    pub fn from_config(
        config: &RoutingConfig,
        pairs: Vec<(String, Box<dyn DiagnosticConsumer>)>,
    ) -> Result<Self, RoutingError> {
        let pairs = pairs
            .into_iter()
            .map(|(file, consumer)| {
                let slot = if config.is_suppressed(&file) {
                    tracing::debug!(file = %file, "suppressing diagnostics for non-primary file");
                    SinkSlot::Suppressed
                } else {
                    SinkSlot::Owned(consumer)
                };
                (file, slot)
            })
            .collect();
        Self::new(pairs)
    }

    /// Returns the number of registrations. Never zero.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Always `false`: a router cannot be built without registrations.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns the file name of a registration (empty for catch-alls).
    pub fn file(&self, index: SinkIndex) -> Option<&str> {
        self.registrations.get(index.0).map(|r| r.file.as_str())
    }

    /// Returns where the next note will be delivered.
    pub fn target_for_notes(&self) -> Target {
        self.target_for_notes
    }

    /// Returns `true` once the range index has been built.
    pub fn is_index_built(&self) -> bool {
        matches!(self.index, IndexState::Built(_))
    }

    /// Consumes the router, returning its registrations in order.
    pub fn into_registrations(self) -> Vec<(String, SinkSlot)> {
        self.registrations
            .into_iter()
            .map(|r| (r.file, r.slot))
            .collect()
    }

    /// Builds the range index if it hasn't been built yet.
    ///
    /// Returns `false` while no registered file has a loaded buffer; the
    /// build is retried on the next call. This is the only place the router
    /// mutates its index, and [`handle_diagnostic`](Self::handle_diagnostic)
    /// calls it implicitly.
    pub fn ensure_index(&mut self, resolver: &dyn LocationResolver) -> Result<bool, RoutingError> {
        if self.is_index_built() {
            return Ok(true);
        }
        let files = self
            .registrations
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.file.as_str()));
        match RangeIndex::build(files, resolver)? {
            BuildOutcome::Built(index) => {
                tracing::debug!(files = index.len(), "built diagnostic range index");
                self.index = IndexState::Built(index);
                Ok(true)
            }
            BuildOutcome::NotLoaded => {
                tracing::debug!("source buffers not loaded yet, broadcasting");
                Ok(false)
            }
        }
    }

    /// Resolves the target for a diagnostic at `loc`, building the index
    /// first if needed.
    pub fn sink_for_location(
        &mut self,
        resolver: &dyn LocationResolver,
        loc: SourceLoc,
    ) -> Result<Target, RoutingError> {
        if self.registrations.len() > 1 && loc.is_valid() {
            self.ensure_index(resolver)?;
        }
        Ok(self.lookup(loc))
    }

    /// Resolves the target for `loc` without touching the index.
    ///
    /// Before the index is built, every location that needs it resolves to
    /// [`Target::Broadcast`].
    pub fn lookup(&self, loc: SourceLoc) -> Target {
        // with a single registration every diagnostic, in a file or not,
        // can only go to that one consumer
        if self.registrations.len() == 1 {
            return self.target_of(0);
        }
        if loc.is_invalid() {
            return Target::Broadcast;
        }
        match &self.index {
            IndexState::Built(index) => index
                .lookup(loc)
                .map_or(Target::Broadcast, |registration| self.target_of(registration)),
            IndexState::Unbuilt => Target::Broadcast,
        }
    }

    /// Delivers one diagnostic.
    ///
    /// Errors, warnings and remarks are routed by `loc` and set the cursor
    /// that notes follow; notes are delivered to wherever the last primary
    /// diagnostic went (a broadcast if there was none). The first call that
    /// needs the range index builds it.
    pub fn handle_diagnostic(
        &mut self,
        resolver: &dyn LocationResolver,
        loc: SourceLoc,
        kind: DiagnosticKind,
        format_string: &str,
        format_args: &[DiagnosticArgument],
        info: &DiagnosticInfo,
    ) -> Result<(), RoutingError> {
        let target = if kind.is_primary() {
            let target = self.sink_for_location(resolver, loc)?;
            self.target_for_notes = target;
            target
        } else {
            self.target_for_notes
        };
        tracing::trace!(%kind, ?loc, ?target, "routing diagnostic");

        match target {
            Target::Broadcast => {
                for registration in &mut self.registrations {
                    if let SinkSlot::Owned(consumer) = &mut registration.slot {
                        consumer.handle_diagnostic(resolver, loc, kind, format_string, format_args, info);
                    }
                }
            }
            Target::Specific(SinkIndex(i)) => {
                if let SinkSlot::Owned(consumer) = &mut self.registrations[i].slot {
                    consumer.handle_diagnostic(resolver, loc, kind, format_string, format_args, info);
                }
            }
            Target::Suppress => {}
        }
        Ok(())
    }

    /// Finishes every owned consumer and returns `true` if any of them failed.
    ///
    /// Every consumer is finished even after one reports failure, since
    /// finishing may flush output.
    pub fn finish_processing(&mut self) -> bool {
        let mut had_error = false;
        for registration in &mut self.registrations {
            if let SinkSlot::Owned(consumer) = &mut registration.slot {
                had_error |= consumer.finish_processing();
            }
        }
        had_error
    }

    fn target_of(&self, registration: usize) -> Target {
        match self.registrations[registration].slot {
            SinkSlot::Owned(_) => Target::Specific(SinkIndex(registration)),
            SinkSlot::Suppressed => Target::Suppress,
        }
    }
}
