use std::num::ParseIntError;
use thiserror::Error;


/// Errors raised while loading grids or searching them for a path
#[derive(Debug, Error)]
pub enum PathSumError {
    /// Frontier ran dry before the end condition was met
    #[error("no path found")]
    NoPathFound,

    /// Path cost does not fit the cost type
    #[error("path cost overflows")]
    CostOverflow,

    /// Grid rows of differing length
    #[error("malformed grid: row {row} has {found} weights, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Triangle row `row` must hold exactly `row + 1` weights
    #[error("malformed triangle: row {row} has {found} weights, expected {expected}")]
    MalformedTriangle {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Token on a data line is not a non-negative integer
    #[error("line {line}: invalid weight {token:?}")]
    ParseWeight {
        line: usize, // 1-based
        token: String,
        #[source]
        source: ParseIntError,
    },
}
