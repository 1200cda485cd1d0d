use crate::errors::PathSumError;

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Cell position on a grid, row-major
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, None when it would leave the non-negative quadrant
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(drow)?,
            col: self.col.checked_add_signed(dcol)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Rectangular matrix of non-negative node weights
/// Stored flat, row-major. Rows are validated to be of equal length on construction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>"))]
pub struct Grid {
    weights: Vec<u64>,
    rows: usize,
    cols: usize,
}

impl Grid {

    /// Build a grid from nested rows
    /// Zero rows, or rows that are all empty, give an empty grid
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, PathSumError> {
        let cols = rows.first().map_or(0, Vec::len);

        let mut weights = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PathSumError::MalformedGrid {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            weights.extend_from_slice(row);
        }

        let rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Self { weights, rows, cols })
    }

    /// Parse rows of comma and/or whitespace separated weights, one row per line
    /// Blank lines are skipped
    pub fn parse(input: &str) -> Result<Self, PathSumError> {
        Self::from_rows(parse_rows(input)?)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<u64> {
        if self.contains(coord) {
            Some(self.weights[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    /// Weight at `coord`
    /// Panics when out of bounds, like slice indexing
    pub fn weight(&self, coord: Coord) -> u64 {
        match self.get(coord) {
            Some(w) => w,
            None => panic!("{coord} is outside a {}x{} grid", self.rows, self.cols),
        }
    }

    /// Index of the last column, None for an empty grid
    pub fn last_col(&self) -> Option<usize> {
        self.cols.checked_sub(1)
    }

    pub fn bottom_right(&self) -> Option<Coord> {
        Some(Coord::new(self.rows.checked_sub(1)?, self.cols.checked_sub(1)?))
    }

    /// Row slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> {
        // chunks panics on zero, an empty grid has no rows anyway
        self.weights.chunks(self.cols.max(1))
    }

    /// New grid of the same shape with every weight mapped through `f`
    pub fn map_weights<F>(&self, f: F) -> Self
    where
        F: Fn(u64) -> u64,
    {
        Self {
            weights: self.weights.iter().map(|&w| f(w)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl FromStr for Grid {
    type Err = PathSumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<u64>>> for Grid {
    type Error = PathSumError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u64>> {
    fn from(grid: Grid) -> Self {
        grid.iter_rows().map(<[u64]>::to_vec).collect()
    }
}


/// Total of a run of weights, CostOverflow when it does not fit in u64
pub(crate) fn checked_sum<I>(weights: I) -> Result<u64, PathSumError>
where
    I: IntoIterator<Item = u64>,
{
    weights
        .into_iter()
        .try_fold(0_u64, u64::checked_add)
        .ok_or(PathSumError::CostOverflow)
}


/// Split text into rows of weights
/// Separators are commas, whitespace, or both; line numbers in errors are 1-based
pub(crate) fn parse_rows(input: &str) -> Result<Vec<Vec<u64>>, PathSumError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<u64>().map_err(|source| PathSumError::ParseWeight {
                        line: i + 1,
                        token: token.to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<u64>, _>>()
        })
        .collect()
}
