use thiserror::Error;

use crate::grid::Position;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable target is not an error; searches report it as
/// [`PathResult::NotFound`](crate::PathResult::NotFound).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a grid is requested with a zero dimension or with more
    /// cells than can be addressed.
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    /// Raised when a coordinate lies outside the grid.
    #[error("cell ({x},{y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },

    /// Raised when a cell handle does not belong to the grid it was used with.
    #[error("cell handle {index} does not belong to a grid of {len} cells")]
    UnknownCell { index: usize, len: usize },

    /// Raised when a search is requested before a target has been chosen.
    #[error("no target cell has been set")]
    MissingTarget,

    /// Raised when a role mutation would give one cell two roles.
    #[error("cannot change cell {position}: {reason}")]
    RoleConflict {
        position: Position,
        reason: &'static str,
    },

    /// Raised when a text layout cannot be turned into a grid.
    #[error("invalid layout at line {line}: {message}")]
    LayoutParse { line: usize, message: String },

    /// Raised when an algorithm name is not recognised.
    #[error("unknown search algorithm: {name} (expected bfs, dijkstra or a-star)")]
    UnknownAlgorithm { name: String },

    /// Raised when a heuristic name is not recognised.
    #[error("unknown heuristic: {name} (expected manhattan or euclidean)")]
    UnknownHeuristic { name: String },

    /// Raised when a coordinate pair cannot be parsed from `x,y` form.
    #[error("invalid position '{input}'; expected the form x,y")]
    InvalidPosition { input: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by an argument the caller passed in
    /// (bad coordinates, foreign cell handles, missing target, role
    /// conflicts) rather than by the grid shape or an IO failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. }
                | Error::UnknownCell { .. }
                | Error::MissingTarget
                | Error::RoleConflict { .. }
                | Error::InvalidPosition { .. }
        )
    }
}
