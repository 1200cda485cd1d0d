use crate::errors::PathSumError;
use crate::graph_algos::dijkstra;
use crate::grid::{checked_sum, parse_rows};

use std::str::FromStr;
use log::debug;


/// Number triangle, row `i` holds `i + 1` weights
/// From `(row, col)` a path continues to `(row + 1, col)` or `(row + 1, col + 1)`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Triangle {
    rows: Vec<Vec<u64>>,
}

impl Triangle {

    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, PathSumError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != i + 1 {
                return Err(PathSumError::MalformedTriangle {
                    row: i,
                    expected: i + 1,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Parse whitespace separated rows, apex first
    pub fn parse(input: &str) -> Result<Self, PathSumError> {
        Self::from_rows(parse_rows(input)?)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Weights on a top to bottom path with the largest sum, apex first
    ///
    /// Maximising is done as a minimisation over inverted weights `max - w`.
    /// Every top to bottom path visits exactly one cell per row, so the inversion
    /// shifts all path costs by the same amount and keeps edge costs non-negative.
    /// Inverted costs are summed as u128, so even rows full of zeros under a
    /// u64::MAX peak cannot overflow the search.
    pub fn max_path(&self) -> Result<Vec<u64>, PathSumError> {
        let Some(peak) = self.rows.iter().flatten().copied().max() else {
            return Err(PathSumError::NoPathFound);
        };
        let last_row = self.rows.len() - 1;

        let children = |&(row, col): &(usize, usize)| -> Vec<((usize, usize), u128)> {
            match self.rows.get(row + 1) {
                Some(below) => vec![
                    ((row + 1, col), u128::from(peak - below[col])),
                    ((row + 1, col + 1), u128::from(peak - below[col + 1])),
                ],
                None => vec![],
            }
        };

        let path = dijkstra((0, 0), children, |&(row, _)| row == last_row)?;
        let weights: Vec<u64> = path.into_iter().map(|(row, col)| self.rows[row][col]).collect();

        debug!("triangle of height {} peaks at {:?}", self.height(), checked_sum(weights.iter().copied()).ok());

        Ok(weights)
    }

    /// Largest top to bottom sum
    /// CostOverflow when it does not fit in u64
    pub fn max_path_sum(&self) -> Result<u64, PathSumError> {
        checked_sum(self.max_path()?)
    }
}

impl FromStr for Triangle {
    type Err = PathSumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<u64>>> for Triangle {
    type Error = PathSumError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
