//! Diagnostic consumers and per-file diagnostic routing.
//!
//! A compiler invocation that processes several inputs can give each input
//! its own [`DiagnosticConsumer`]. The [`FileSpecificRouter`] owns those
//! consumers and sends every diagnostic to the consumer of the file it is
//! located in, broadcasting to all of them when no single file applies.
//! Notes always follow the consumer chosen for the diagnostic they attach to.

#![warn(missing_docs)]

pub mod argument;
pub mod collecting;
pub mod consumer;
pub mod error;
pub mod info;
pub mod kind;
pub mod logger;
pub mod null;
pub mod range_index;
pub mod router;

pub use argument::DiagnosticArgument;
pub use collecting::{CollectedDiagnostic, CollectingConsumer};
pub use consumer::DiagnosticConsumer;
pub use error::RoutingError;
pub use info::DiagnosticInfo;
pub use kind::DiagnosticKind;
pub use logger::{DiagnosticLogger, DiscardedDiagnostic, NoopLogger, TracingLogger};
pub use null::NullConsumer;
pub use router::{FileSpecificRouter, SinkIndex, SinkSlot, Target};
