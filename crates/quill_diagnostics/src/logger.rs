//! Injectable logging for diagnostics that a consumer throws away.

use crate::argument::DiagnosticArgument;
use crate::info::DiagnosticInfo;
use crate::kind::DiagnosticKind;
use quill_source::SourceLoc;

/// A diagnostic that was received and then discarded.
#[derive(Clone, Copy, Debug)]
pub struct DiscardedDiagnostic<'a> {
    /// Where the diagnostic was located.
    pub loc: SourceLoc,
    /// The kind of the diagnostic.
    pub kind: DiagnosticKind,
    /// The unformatted message.
    pub format_string: &'a str,
    /// Arguments for `format_string`.
    pub format_args: &'a [DiagnosticArgument],
    /// The diagnostic's metadata.
    pub info: &'a DiagnosticInfo,
}

/// Receives a record of every diagnostic a [`NullConsumer`](crate::NullConsumer) drops.
pub trait DiagnosticLogger {
    /// Logs one discarded diagnostic.
    fn log_discarded(&mut self, record: &DiscardedDiagnostic<'_>);
}

/// A logger that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl DiagnosticLogger for NoopLogger {
    fn log_discarded(&mut self, _record: &DiscardedDiagnostic<'_>) {}
}

/// A logger that emits a `tracing` debug event per discarded diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl DiagnosticLogger for TracingLogger {
    fn log_discarded(&mut self, record: &DiscardedDiagnostic<'_>) {
        tracing::debug!(
            kind = %record.kind,
            loc = ?record.loc,
            id = record.info.id,
            format = record.format_string,
            args = ?record.format_args,
            "null consumer received diagnostic"
        );
    }
}
