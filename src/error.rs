//! Error type for path queries with invalid endpoints.

use grid_util::point::Point;
use thiserror::Error;

/// Rejected start or goal of a [find_path](crate::MazeGrid::find_path) call.
///
/// An unreachable goal is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Endpoint lies outside the grid.
    #[error("point {point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending endpoint.
        point: Point,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// Endpoint sits on a blocked cell.
    #[error("cell {point} is blocked")]
    Blocked {
        /// The offending endpoint.
        point: Point,
    },
}
