use thiserror::Error;

/// Errors returned by the searches in [`search`](crate::search).
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchError {
    /// The search was started without any starting positions.
    #[error("No starting positions were given")]
    NoStartingPositions,

    /// Every reachable state was expanded without `terminates` accepting any of them.
    #[error("Could not find a path from the given starting positions to a node accepted by the terminates predicate")]
    Unreachable,
}

/// Errors returned by the [`geometry`](crate::geometry) types.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum GeometryError {
    /// Rotations are only defined for multiples of 45 degrees.
    #[error("Invalid angle {0}, must be a multiple of 45")]
    InvalidAngle(i32),
}

/// Shorthand for the Result of a search.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
