//! Minimal path sums over weighted grids
//!
//! A generic Dijkstra search drives three grid settings (corner to corner moving
//! down and right, column to column moving up, down and right, corner to corner
//! in any direction) plus maximum sums down a number triangle.
//!
//! ```
//! use pathsum::{Grid, PathConfig, path_sum};
//!
//! let grid: Grid = "1,9\n1,1".parse().unwrap();
//! assert_eq!(path_sum(&grid, &PathConfig::two_ways()).unwrap(), 3);
//! ```

mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid;
pub mod path_sum;
pub mod sieve;
pub mod triangle;

pub use errors::PathSumError;
pub use grid::{Coord, Grid};
pub use path_sum::{Direction, EndPolicy, Moves, PathConfig, StartPolicy, path_sum, solve_coords, solve_path};
pub use sieve::PrimeMask;
pub use triangle::Triangle;
