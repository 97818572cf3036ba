//! Random fleet layout.

use crate::core::config::GameConfig;
use crate::core::coord::Coordinate;
use crate::core::grid::Grid;
use crate::core::random::UniformSource;
use crate::core::ship::{Orientation, Ship};

/// Lays out a complete fleet at random.
///
/// Ships are placed in the configured order. Each attempt samples a bow and an
/// orientation and tries to place the current ship; failures are simply
/// retried. All ships on one grid share a single attempt budget, and when it
/// runs out the grid is thrown away and the whole fleet starts over.
///
/// Termination is probabilistic. [`GameConfig`] rejects fleets that can never
/// fit, but a fleet that only fits in very few layouts may take many rounds.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    size: usize,
    lengths: Vec<usize>,
    attempt_budget: usize,
}

impl FleetGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: config.size(),
            lengths: config.fleet().to_vec(),
            attempt_budget: config.attempt_budget(),
        }
    }

    /// Generate a fully placed grid.
    pub fn generate<S>(&self, source: &mut S, concealed: bool) -> Grid
    where
        S: UniformSource + ?Sized,
    {
        let mut rounds = 0usize;
        loop {
            rounds += 1;
            if let Some(grid) = self.try_generate(source, concealed) {
                log::debug!("fleet placed after {} round(s)", rounds);
                return grid;
            }
            log::debug!(
                "placement budget of {} exhausted, restarting fleet (round {})",
                self.attempt_budget,
                rounds
            );
        }
    }

    /// A single round: returns `None` when the attempt budget runs out.
    pub fn try_generate<S>(&self, source: &mut S, concealed: bool) -> Option<Grid>
    where
        S: UniformSource + ?Sized,
    {
        let mut grid = Grid::new(self.size, concealed);
        let mut attempts = 0usize;
        for &length in &self.lengths {
            loop {
                if attempts >= self.attempt_budget {
                    return None;
                }
                attempts += 1;
                let ship = random_ship(source, self.size, length);
                if grid.place_ship(ship).is_ok() {
                    break;
                }
            }
        }
        Some(grid)
    }
}

/// Sample a bow anywhere on the grid and an orientation.
fn random_ship<S: UniformSource + ?Sized>(source: &mut S, size: usize, length: usize) -> Ship {
    let row = source.below(size);
    let col = source.below(size);
    let orientation = if source.below(2) == 0 {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(length, orientation, Coordinate::new(row, col))
}
