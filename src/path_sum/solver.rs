use crate::errors::PathSumError;
use crate::graph_algos::dijkstra;
use crate::grid::{Coord, Grid, checked_sum};
use super::{EndPolicy, Moves, PathConfig, StartPolicy};

use log::{debug, warn};


/// Search node
/// Source is the zero cost virtual entry in front of column 0
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Node {
    Source,
    Cell(Coord),
}

/// End condition resolved against a concrete grid
#[derive(Copy, Clone, Debug)]
enum Goal {
    Cell(Coord),
    Column(usize),
}

impl Goal {
    fn resolve(grid: &Grid, end: EndPolicy) -> Option<Self> {
        match end {
            EndPolicy::Fixed(coord) => {
                if grid.contains(coord) {
                    Some(Goal::Cell(coord))
                } else {
                    warn!("end {coord} lies outside a {}x{} grid", grid.rows(), grid.cols());
                    None
                }
            }
            EndPolicy::BottomRight => grid.bottom_right().map(Goal::Cell),
            EndPolicy::AnyInLastColumn => grid.last_col().map(Goal::Column),
        }
    }

    fn is_met(self, node: &Node) -> bool {
        match (self, node) {
            (Goal::Cell(goal), Node::Cell(coord)) => goal == *coord,
            (Goal::Column(col), Node::Cell(coord)) => coord.col == col,
            (_, Node::Source) => false,
        }
    }
}


/// Coordinates of a minimum weight path, start first
/// Every step pays the weight of the cell it enters, so with non-negative weights
/// the first time the goal leaves the frontier its path is optimal.
/// Search costs are u128, wide enough for any path of u64 weights a grid can hold
pub fn solve_coords(grid: &Grid, config: &PathConfig) -> Result<Vec<Coord>, PathSumError> {

    debug!("solving {}x{} grid with {config:?}", grid.rows(), grid.cols());

    let goal = Goal::resolve(grid, config.end).ok_or(PathSumError::NoPathFound)?;

    let start = match config.start {
        StartPolicy::Fixed(coord) if grid.contains(coord) => Node::Cell(coord),
        StartPolicy::Fixed(coord) => {
            warn!("start {coord} lies outside a {}x{} grid", grid.rows(), grid.cols());
            return Err(PathSumError::NoPathFound);
        }
        StartPolicy::AnyInFirstColumn => Node::Source,
    };

    let path = dijkstra(
        start,
        |node: &Node| neighbors(grid, config.moves, node),
        |node: &Node| goal.is_met(node),
    )?;

    let coords: Vec<Coord> = path
        .into_iter()
        .filter_map(|node| match node {
            Node::Cell(coord) => Some(coord),
            Node::Source => None,
        })
        .collect();

    debug!(
        "found path of {} cells, total {:?}",
        coords.len(),
        checked_sum(coords.iter().map(|&c| grid.weight(c))).ok()
    );

    Ok(coords)
}

/// Weights on a minimum weight path, start first
/// Sum them for the path cost
pub fn solve_path(grid: &Grid, config: &PathConfig) -> Result<Vec<u64>, PathSumError> {
    let coords = solve_coords(grid, config)?;
    Ok(coords.into_iter().map(|c| grid.weight(c)).collect())
}

/// Minimal path sum
/// CostOverflow when the cheapest path still sums past u64::MAX
pub fn path_sum(grid: &Grid, config: &PathConfig) -> Result<u64, PathSumError> {
    checked_sum(solve_path(grid, config)?)
}


/// Cells reachable in one step, each paired with the cost of entering it
fn neighbors(grid: &Grid, moves: Moves, node: &Node) -> Vec<(Node, u128)> {
    match *node {
        Node::Source => (0..grid.rows())
            .map(|row| {
                let coord = Coord::new(row, 0);
                (Node::Cell(coord), u128::from(grid.weight(coord)))
            })
            .collect(),
        Node::Cell(coord) => moves
            .iter()
            .filter_map(|direction| {
                let (drow, dcol) = direction.delta();
                let next = coord.offset(drow, dcol)?;
                grid.get(next).map(|w| (Node::Cell(next), u128::from(w)))
            })
            .collect(),
    }
}
