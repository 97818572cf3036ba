//! Grid coordinates.
//!
//! Coordinates are 0-based internally. Hosts speak 1-based row/column pairs;
//! use [`Coordinate::from_one_based`] and [`Coordinate::one_based`] at the
//! boundary.

use std::fmt;

/// A (row, column) position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// Offsets of the eight cells at Chebyshev distance 1.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert a 1-based (row, col) pair. Returns `None` if either is zero.
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Self::new(row.checked_sub(1)?, col.checked_sub(1)?))
    }

    /// The 1-based (row, col) pair for this coordinate.
    pub fn one_based(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }

    /// The coordinate `steps` cells away along a row (`down == false`) or a
    /// column (`down == true`).
    pub(crate) fn offset(self, steps: usize, down: bool) -> Self {
        if down {
            Self::new(self.row + steps, self.col)
        } else {
            Self::new(self.row, self.col + steps)
        }
    }

    /// Iterate the up to eight surrounding cells. Cells that would fall below
    /// row or column 0 are skipped; the upper bound is the grid's business.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Coordinate::new(row, col))
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Build from a 0-based `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats as the 1-based `row,col` a player would type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.one_based();
        write!(f, "{},{}", row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(Coordinate::from_one_based(1, 1), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::from_one_based(6, 2), Some(Coordinate::new(5, 1)));
        assert_eq!(Coordinate::from_one_based(0, 3), None);
        assert_eq!(Coordinate::new(2, 4).one_based(), (3, 5));
        assert_eq!(Coordinate::new(2, 4).to_string(), "3,5");
    }

    #[test]
    fn corner_has_three_neighbors() {
        let n: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
        assert_eq!(
            n,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
        assert_eq!(Coordinate::new(3, 3).neighbors().count(), 8);
    }
}
