//! Domain error types.
//!
//! These errors represent validation failures while loading the network.
//! Lookups that simply miss (an unknown stop in a query) are not errors and
//! surface as `None` instead.

/// Errors raised while populating a transport catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A distance or bus references a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A stop with this name already exists
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name already exists
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A bus was declared without any stops
    #[error("bus {0} has no stops")]
    EmptyBus(String),

    /// Stop coordinates are out of range or not finite
    #[error("invalid coordinates for stop {0}")]
    InvalidCoordinates(String),
}
