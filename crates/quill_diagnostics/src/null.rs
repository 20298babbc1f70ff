//! A consumer that discards every diagnostic.

use crate::argument::DiagnosticArgument;
use crate::consumer::DiagnosticConsumer;
use crate::info::DiagnosticInfo;
use crate::kind::DiagnosticKind;
use crate::logger::{DiagnosticLogger, DiscardedDiagnostic, NoopLogger, TracingLogger};
use quill_config::LoggingConfig;
use quill_source::{LocationResolver, SourceLoc};

/// Accepts any diagnostic and drops it, optionally logging what it dropped.
///
/// Finishing always succeeds.
pub struct NullConsumer {
    logger: Box<dyn DiagnosticLogger>,
}

impl NullConsumer {
    /// Creates a null consumer that logs nothing.
    pub fn new() -> Self {
        Self::with_logger(NoopLogger)
    }

    /// Creates a null consumer that reports each dropped diagnostic to `logger`.
    pub fn with_logger(logger: impl DiagnosticLogger + 'static) -> Self {
        Self {
            logger: Box::new(logger),
        }
    }

    /// Creates a null consumer that traces dropped diagnostics if the
    /// configuration asks for it.
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.log_discarded {
            Self::with_logger(TracingLogger)
        } else {
            Self::new()
        }
    }
}

impl Default for NullConsumer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticConsumer for NullConsumer {
    fn handle_diagnostic(
        &mut self,
        _resolver: &dyn LocationResolver,
        loc: SourceLoc,
        kind: DiagnosticKind,
        format_string: &str,
        format_args: &[DiagnosticArgument],
        info: &DiagnosticInfo,
    ) {
        self.logger.log_discarded(&DiscardedDiagnostic {
            loc,
            kind,
            format_string,
            format_args,
            info,
        });
    }
}
