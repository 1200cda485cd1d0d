//! Minimal path sums over a weighted grid
//!
//! A path pays the weight of every cell it visits. The three classic settings
//! differ only in where a path may start and end and which steps it may take,
//! so they share one solver and are picked with a [`PathConfig`].

mod solver;

pub use solver::{path_sum, solve_coords, solve_path};

use crate::grid::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Unit step on the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row delta, column delta)
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}


/// Set of allowed steps, the movement policy of a search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Direction>", into = "Vec<Direction>"))]
pub struct Moves(u8);

impl Moves {
    pub const EMPTY: Moves = Moves(0);

    /// Forward only, every path from corner to corner has the same length
    pub const DOWN_RIGHT: Moves = Moves(Direction::Down.bit() | Direction::Right.bit());

    /// Never left, so a path cannot loop back across a column
    pub const UP_DOWN_RIGHT: Moves = Moves(Direction::Up.bit() | Direction::Down.bit() | Direction::Right.bit());

    pub const ALL: Moves = Moves(0b1111);

    pub const fn with(self, direction: Direction) -> Self {
        Moves(self.0 | direction.bit())
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Allowed directions in up, down, left, right order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for Moves {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Moves::EMPTY, Moves::with)
    }
}

impl From<Vec<Direction>> for Moves {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<Moves> for Vec<Direction> {
    fn from(moves: Moves) -> Self {
        moves.iter().collect()
    }
}


/// Where a path may begin
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StartPolicy {
    Fixed(Coord),
    /// Any cell of column 0, entered from a zero cost virtual source
    AnyInFirstColumn,
}

impl StartPolicy {
    pub const TOP_LEFT: StartPolicy = StartPolicy::Fixed(Coord::new(0, 0));
}

impl Default for StartPolicy {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}


/// Where a path may end
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndPolicy {
    Fixed(Coord),
    /// The last cell of the grid, resolved when solving
    #[default]
    BottomRight,
    AnyInLastColumn,
}


/// Everything that varies between path-sum searches
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathConfig {
    pub start: StartPolicy,
    pub end: EndPolicy,
    pub moves: Moves,
}

impl PathConfig {

    /// Top left to bottom right, moving only down and right
    pub const fn two_ways() -> Self {
        Self {
            start: StartPolicy::TOP_LEFT,
            end: EndPolicy::BottomRight,
            moves: Moves::DOWN_RIGHT,
        }
    }

    /// Left column to right column, moving up, down and right
    pub const fn three_ways() -> Self {
        Self {
            start: StartPolicy::AnyInFirstColumn,
            end: EndPolicy::AnyInLastColumn,
            moves: Moves::UP_DOWN_RIGHT,
        }
    }

    /// Top left to bottom right, moving in any direction
    pub const fn four_ways() -> Self {
        Self {
            start: StartPolicy::TOP_LEFT,
            end: EndPolicy::BottomRight,
            moves: Moves::ALL,
        }
    }

    pub const fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    pub const fn with_end(mut self, end: EndPolicy) -> Self {
        self.end = end;
        self
    }

    pub const fn with_moves(mut self, moves: Moves) -> Self {
        self.moves = moves;
        self
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::four_ways()
    }
}
