//! Common types for the engine: shot outcomes, cell states, seats and errors.

use thiserror::Error;

use crate::core::coord::Coordinate;

/// Result of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Nothing occupies the cell. Ends the shooter's turn.
    Miss,
    /// A ship was hit and is still afloat.
    Hit,
    /// A ship took its last hit and was removed from the fleet.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinkings earn the shooter another shot.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    /// Undamaged ship segment.
    Ship,
    Hit,
    Miss,
    /// Never shot at, but known to be empty because an adjacent ship sank.
    Revealed,
}

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub(crate) fn from_parity(counter: usize) -> Self {
        if counter % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

/// Reasons a ship cannot be placed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("ship cell {0} is outside the grid")]
    OutOfBounds(Coordinate),
    #[error("ship cell {0} overlaps or touches another ship")]
    Overlap(Coordinate),
}

/// Reasons a shot is refused. Both are recoverable: pick another cell.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coordinate),
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Coordinate),
}

impl ShotError {
    /// The coordinate that was refused.
    pub fn coord(&self) -> Coordinate {
        match *self {
            ShotError::OutOfBounds(c) | ShotError::AlreadyTargeted(c) => c,
        }
    }
}

/// Internal consistency failures. These indicate a bug, not a game condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("ship with bow at {bow} was hit after it had already been destroyed")]
    HitOnDestroyedShip { bow: Coordinate },
}

/// Errors returned by [`Grid::shoot`](crate::Grid::shoot).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error(transparent)]
    Shot(#[from] ShotError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Configurations that can never produce a playable match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship lengths must be positive")]
    ZeroLengthShip,
    #[error("ship of length {length} does not fit on a {size}x{size} grid")]
    ShipTooLong { length: usize, size: usize },
    #[error("fleet needs {required} cells including gaps but a {size}x{size} grid allows at most {capacity}")]
    FleetTooDense {
        size: usize,
        required: usize,
        capacity: usize,
    },
}
