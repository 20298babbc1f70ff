//! Contract violations detected while routing diagnostics.

/// A violation of the router's construction or buffer contract.
///
/// These indicate a bug in whoever set up the router, never a problem with
/// the user's input: continuing would misfile diagnostics, so every variant
/// is fatal to the routing operation that detected it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// The router was constructed without any consumer.
    #[error("cannot route diagnostics without any registered consumer")]
    NoConsumers,

    /// Two registrations name the same file.
    #[error("multiple consumers registered for file '{0}'")]
    DuplicateFile(String),

    /// Two registered files resolved to overlapping buffer ranges.
    #[error("buffer ranges of '{first}' and '{second}' overlap despite being distinct files")]
    OverlappingRanges {
        /// The file whose range ends first.
        first: String,
        /// The file whose range it overlaps.
        second: String,
    },

    /// Some, but not all, registered files had a loaded buffer.
    #[error("no buffer is loaded for '{missing}' although {loaded} other registered file(s) are loaded")]
    PartiallyLoadedBuffers {
        /// The first registered file without a buffer.
        missing: String,
        /// How many registered files did resolve.
        loaded: usize,
    },
}
