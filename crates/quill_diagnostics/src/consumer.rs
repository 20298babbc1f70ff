//! The contract every diagnostic destination implements.

use crate::argument::DiagnosticArgument;
use crate::info::DiagnosticInfo;
use crate::kind::DiagnosticKind;
use quill_source::{LocationResolver, SourceLoc};
use std::cell::RefCell;
use std::rc::Rc;

/// A destination for diagnostics: a printer, a serialized log, a counter.
///
/// Consumers report problems through the return value of
/// [`finish_processing`](Self::finish_processing) rather than by failing
/// individual calls.
pub trait DiagnosticConsumer {
    /// Receives one diagnostic.
    ///
    /// `loc` may be [`SourceLoc::INVALID`] for diagnostics with no position.
    fn handle_diagnostic(
        &mut self,
        resolver: &dyn LocationResolver,
        loc: SourceLoc,
        kind: DiagnosticKind,
        format_string: &str,
        format_args: &[DiagnosticArgument],
        info: &DiagnosticInfo,
    );

    /// Called once compilation is over. Returns `true` if the consumer failed
    /// (for example, it could not flush its output).
    fn finish_processing(&mut self) -> bool {
        false
    }
}

/// Lets a caller keep a handle on a consumer after handing ownership of the
/// shared cell to a router.
impl<C: DiagnosticConsumer + ?Sized> DiagnosticConsumer for Rc<RefCell<C>> {
    fn handle_diagnostic(
        &mut self,
        resolver: &dyn LocationResolver,
        loc: SourceLoc,
        kind: DiagnosticKind,
        format_string: &str,
        format_args: &[DiagnosticArgument],
        info: &DiagnosticInfo,
    ) {
        self.borrow_mut()
            .handle_diagnostic(resolver, loc, kind, format_string, format_args, info);
    }

    fn finish_processing(&mut self) -> bool {
        self.borrow_mut().finish_processing()
    }
}
