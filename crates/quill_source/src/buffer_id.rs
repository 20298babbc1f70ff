//! Opaque identifier for buffers loaded into a [`SourceManager`](crate::SourceManager).

use serde::{Deserialize, Serialize};

/// Opaque identifier for a source buffer.
///
/// Each buffer gets a unique `BufferId` when it is added. Buffer ids are dense
/// and assigned in load order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BufferId(u32);

impl BufferId {
    /// Creates a `BufferId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `BufferId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
