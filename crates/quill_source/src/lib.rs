//! Source buffers, raw locations, and the location-resolver contract.
//!
//! Every buffer loaded into a [`SourceManager`] occupies its own slice of a
//! single global offset space, so a bare [`SourceLoc`] identifies both the
//! buffer and the position inside it. [`LocationResolver`] is the narrow view
//! of that space that diagnostic routing depends on.

#![warn(missing_docs)]

pub mod buffer_id;
pub mod loc;
pub mod range;
pub mod resolved_location;
pub mod resolver;
pub mod source_buffer;
pub mod source_manager;

pub use buffer_id::BufferId;
pub use loc::SourceLoc;
pub use range::CharRange;
pub use resolved_location::ResolvedLocation;
pub use resolver::LocationResolver;
pub use source_buffer::SourceBuffer;
pub use source_manager::SourceManager;
