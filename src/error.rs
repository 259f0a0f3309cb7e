use thiserror::Error;

/// Top-level error type for the waterline weave library.
#[derive(Debug, Error)]
pub enum WaterlineError {
    #[error(transparent)]
    Fiber(#[from] FiberError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("weave graph has already been built")]
    AlreadyBuilt,
}

/// Errors related to input fibers.
#[derive(Debug, Error)]
pub enum FiberError {
    #[error("fiber direction is neither x- nor y-parallel")]
    InvalidDirection,

    #[error("fiber carries no intervals")]
    Empty,
}

/// Errors related to the weave topology store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("no edge between the given vertices")]
    EdgeNotFound,
}

/// Convenience type alias for results using [`WaterlineError`].
pub type Result<T> = std::result::Result<T, WaterlineError>;
