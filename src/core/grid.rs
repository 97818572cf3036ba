//! One side's grid: ship placement, shot resolution and the bookkeeping that
//! keeps ships apart and shots unique.

use std::fmt;

use crate::core::common::{CellState, GridError, PlacementError, ShotError, ShotOutcome};
use crate::core::coord::Coordinate;
use crate::core::ship::Ship;

/// Why a cell is reserved. A cell may be reserved for several reasons at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Reservation {
    /// A ship occupies the cell.
    hull: bool,
    /// The cell touches a ship and cannot host another one.
    buffer: bool,
    /// The cell was shot at, or revealed empty when a neighbour sank.
    targeted: bool,
}

impl Reservation {
    fn any(self) -> bool {
        self.hull || self.buffer || self.targeted
    }
}

/// An accepted shot, in the order it was fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub coord: Coordinate,
    pub outcome: ShotOutcome,
}

/// A square grid holding one side's fleet.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    concealed: bool,
    cells: Vec<CellState>,
    reservations: Vec<Reservation>,
    fleet: Vec<Ship>,
    sunk: Vec<Ship>,
    history: Vec<ShotRecord>,
}

impl Grid {
    /// Create an empty `size x size` grid. `concealed` hides ship cells from
    /// [`Grid::visible_state`].
    pub fn new(size: usize, concealed: bool) -> Self {
        Grid {
            size,
            concealed,
            cells: vec![CellState::Empty; size * size],
            reservations: vec![Reservation::default(); size * size],
            fleet: Vec::new(),
            sunk: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Live ships in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Ships sunk so far, in the order they went down.
    pub fn sunk(&self) -> &[Ship] {
        &self.sunk
    }

    /// Every accepted shot against this grid.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    /// True state of a cell, or `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// State of a cell as an onlooker may see it: ship segments show as
    /// empty on a concealed grid.
    pub fn visible_state(&self, coord: Coordinate) -> Option<CellState> {
        self.cell(coord).map(|state| match state {
            CellState::Ship if self.concealed => CellState::Empty,
            other => other,
        })
    }

    /// Whether the cell is occupied, buffered or already targeted.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map_or(false, |i| self.reservations[i].any())
    }

    /// Whether the cell has been shot at or revealed, i.e. can no longer be
    /// fired upon.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map_or(false, |i| self.reservations[i].targeted)
    }

    /// Number of reserved cells.
    pub fn reserved_count(&self) -> usize {
        self.reservations.iter().filter(|r| r.any()).count()
    }

    /// Number of in-bounds cells that can still be fired upon.
    pub fn untargeted_count(&self) -> usize {
        self.reservations.iter().filter(|r| !r.targeted).count()
    }

    /// Iterate the grid row by row. Each row yields `(coordinate, visible state)`.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Coordinate, CellState)> + '_> + '_ {
        (0..self.size).map(move |row| {
            (0..self.size).map(move |col| {
                let coord = Coordinate::new(row, col);
                let state = self.visible_state(coord).unwrap_or_default();
                (coord, state)
            })
        })
    }

    /// Place a ship. On error the grid is left untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        for cell in ship.occupied_cells() {
            match self.index(cell) {
                None => return Err(PlacementError::OutOfBounds(cell)),
                Some(i) if self.reservations[i].any() => {
                    return Err(PlacementError::Overlap(cell))
                }
                Some(_) => {}
            }
        }
        // Every cell was checked above.
        for cell in ship.occupied_cells() {
            if let Some(i) = self.index(cell) {
                self.cells[i] = CellState::Ship;
                self.reservations[i].hull = true;
            }
        }
        self.fleet.push(ship);
        for cell in ship.occupied_cells() {
            for n in cell.neighbors() {
                if let Some(i) = self.index(n) {
                    if !self.reservations[i].any() {
                        self.reservations[i].buffer = true;
                    }
                }
            }
        }
        Ok(())
    }

    /// Fire at a cell.
    ///
    /// Only cells that were already shot at (or revealed by a sinking) are
    /// refused; ship hulls and placement gaps are fair targets.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, GridError> {
        let idx = self.index(coord).ok_or(ShotError::OutOfBounds(coord))?;
        if self.reservations[idx].targeted {
            return Err(ShotError::AlreadyTargeted(coord).into());
        }
        self.reservations[idx].targeted = true;

        let outcome = match self.fleet.iter().position(|ship| ship.contains(coord)) {
            None => {
                self.cells[idx] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(pos) => {
                self.fleet[pos].apply_hit()?;
                self.cells[idx] = CellState::Hit;
                if self.fleet[pos].is_destroyed() {
                    let ship = self.fleet.remove(pos);
                    self.reveal_contour(&ship);
                    self.sunk.push(ship);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        log::trace!("shot at {} -> {:?}", coord, outcome);
        self.history.push(ShotRecord { coord, outcome });
        Ok(outcome)
    }

    /// Mark the untargeted cells around a sunk ship as known-empty.
    fn reveal_contour(&mut self, ship: &Ship) {
        for cell in ship.occupied_cells() {
            for n in cell.neighbors() {
                if let Some(i) = self.index(n) {
                    if !self.reservations[i].targeted && !ship.contains(n) {
                        self.reservations[i].targeted = true;
                        self.cells[i] = CellState::Revealed;
                    }
                }
            }
        }
    }

    /// True once every ship has been sunk.
    pub fn is_fleet_eliminated(&self) -> bool {
        self.fleet.is_empty()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("concealed", &self.concealed)
            .field("fleet", &self.fleet)
            .field("sunk", &self.sunk)
            .field("shots", &self.history.len())
            .finish()
    }
}
