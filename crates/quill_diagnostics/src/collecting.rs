//! A consumer that keeps every diagnostic it receives.

use crate::argument::DiagnosticArgument;
use crate::consumer::DiagnosticConsumer;
use crate::info::DiagnosticInfo;
use crate::kind::DiagnosticKind;
use quill_source::{LocationResolver, ResolvedLocation, SourceLoc};

/// An owned copy of a diagnostic received by a [`CollectingConsumer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedDiagnostic {
    /// The raw location the diagnostic was emitted at.
    pub loc: SourceLoc,
    /// The location resolved at the time the diagnostic arrived, if possible.
    pub resolved: Option<ResolvedLocation>,
    /// The kind of the diagnostic.
    pub kind: DiagnosticKind,
    /// The unformatted message.
    pub format_string: String,
    /// Arguments for `format_string`.
    pub format_args: Vec<DiagnosticArgument>,
    /// The diagnostic's metadata.
    pub info: DiagnosticInfo,
}

/// Accumulates diagnostics for later inspection.
///
/// Finishing reports failure if any error was received, which makes this the
/// natural per-input consumer when the caller only needs an exit status and
/// the collected messages.
#[derive(Default)]
pub struct CollectingConsumer {
    diagnostics: Vec<CollectedDiagnostic>,
    error_count: usize,
    finish_count: usize,
}

impl CollectingConsumer {
    /// Creates an empty collecting consumer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any error diagnostics have been received.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Returns the number of error diagnostics received so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns the diagnostics received so far.
    pub fn diagnostics(&self) -> &[CollectedDiagnostic] {
        &self.diagnostics
    }

    /// Takes all accumulated diagnostics, leaving the consumer empty.
    ///
    /// The error count is not reset.
    pub fn take_all(&mut self) -> Vec<CollectedDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Returns how many times [`finish_processing`](DiagnosticConsumer::finish_processing) was called.
    pub fn finish_count(&self) -> usize {
        self.finish_count
    }
}

impl DiagnosticConsumer for CollectingConsumer {
    fn handle_diagnostic(
        &mut self,
        resolver: &dyn LocationResolver,
        loc: SourceLoc,
        kind: DiagnosticKind,
        format_string: &str,
        format_args: &[DiagnosticArgument],
        info: &DiagnosticInfo,
    ) {
        if kind.is_error() {
            self.error_count += 1;
        }
        let resolved = if loc.is_valid() {
            resolver.resolve_location(loc)
        } else {
            None
        };
        self.diagnostics.push(CollectedDiagnostic {
            loc,
            resolved,
            kind,
            format_string: format_string.to_string(),
            format_args: format_args.to_vec(),
            info: *info,
        });
    }

    fn finish_processing(&mut self) -> bool {
        self.finish_count += 1;
        self.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_source::SourceManager;

    fn emit(consumer: &mut CollectingConsumer, sm: &SourceManager, loc: SourceLoc, kind: DiagnosticKind) {
        consumer.handle_diagnostic(sm, loc, kind, "message", &[], &DiagnosticInfo::new(1));
    }

    #[test]
    fn empty_consumer() {
        let mut consumer = CollectingConsumer::new();
        assert!(!consumer.has_errors());
        assert_eq!(consumer.error_count(), 0);
        assert!(consumer.take_all().is_empty());
        assert!(!consumer.finish_processing());
        assert_eq!(consumer.finish_count(), 1);
    }

    #[test]
    fn error_marks_failure() {
        let sm = SourceManager::new();
        let mut consumer = CollectingConsumer::new();
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Error);
        assert!(consumer.has_errors());
        assert!(consumer.finish_processing());
    }

    #[test]
    fn warnings_and_notes_do_not_fail() {
        let sm = SourceManager::new();
        let mut consumer = CollectingConsumer::new();
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Warning);
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Remark);
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Note);
        assert_eq!(consumer.diagnostics().len(), 3);
        assert!(!consumer.finish_processing());
    }

    #[test]
    fn resolves_valid_locations() {
        let mut sm = SourceManager::new();
        let id = sm.add_buffer("main.ql", "let x\nlet y".to_string());
        let loc = sm.loc_for_offset(id, 10);
        let mut consumer = CollectingConsumer::new();
        emit(&mut consumer, &sm, loc, DiagnosticKind::Warning);
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Warning);

        let diags = consumer.diagnostics();
        let resolved = diags[0].resolved.as_ref().unwrap();
        assert_eq!(format!("{resolved}"), "main.ql:2:5");
        assert!(diags[1].resolved.is_none());
    }

    #[test]
    fn take_all_drains() {
        let sm = SourceManager::new();
        let mut consumer = CollectingConsumer::new();
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Error);
        emit(&mut consumer, &sm, SourceLoc::INVALID, DiagnosticKind::Warning);
        assert_eq!(consumer.take_all().len(), 2);
        assert!(consumer.take_all().is_empty());
        assert_eq!(consumer.error_count(), 1);
    }
}
