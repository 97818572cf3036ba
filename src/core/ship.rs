//! Ship definitions: a straight run of cells anchored at its bow.

use std::fmt;

use crate::core::common::InvariantViolation;
use crate::core::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, towards higher columns.
    Horizontal,
    /// Extends down the column, towards higher rows.
    Vertical,
}

/// A ship placed (or about to be placed) on a grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    bow: Coordinate,
    hit_points: usize,
}

impl Ship {
    /// Create an undamaged ship.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0. [`GameConfig`](crate::GameConfig) already
    /// rejects such fleets; hosts placing ships by hand must check it
    /// themselves.
    pub fn new(length: usize, orientation: Orientation, bow: Coordinate) -> Self {
        assert!(length > 0, "ship length must be positive");
        Self {
            length,
            orientation,
            bow,
            hit_points: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Remaining undamaged segments.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// The `length` cells starting at the bow, in order. Cells are not bounds
    /// checked; that is the grid's job.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let down = self.orientation == Orientation::Vertical;
        (0..self.length).map(move |i| bow.offset(i, down))
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == self.bow.row
                    && coord.col >= self.bow.col
                    && coord.col < self.bow.col + self.length
            }
            Orientation::Vertical => {
                coord.col == self.bow.col
                    && coord.row >= self.bow.row
                    && coord.row < self.bow.row + self.length
            }
        }
    }

    /// Take one hit.
    pub fn apply_hit(&mut self) -> Result<(), InvariantViolation> {
        if self.hit_points == 0 {
            return Err(InvariantViolation::HitOnDestroyedShip { bow: self.bow });
        }
        self.hit_points -= 1;
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, bow: ({}, {}), orientation: {:?}, hit_points: {} }}",
            self.length, self.bow.row, self.bow.col, self.orientation, self.hit_points,
        )
    }
}
