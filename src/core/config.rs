use crate::core::common::ConfigError;

pub const DEFAULT_SIZE: usize = 6;
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed per grid before starting over.
pub const DEFAULT_ATTEMPT_BUDGET: usize = 1000;

/// Grid size and fleet composition for a match. Always valid once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameConfig {
    size: usize,
    fleet: Vec<usize>,
    attempt_budget: usize,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// Besides the obvious checks, the fleet has to pass a density bound:
    /// give each ship one extra row below and one extra column to the right.
    /// Ships must keep a one-cell gap, so these `2 x (len + 1)` blocks never
    /// overlap and all fit inside a `(size + 1)` square. A fleet whose blocks
    /// add up to more than that can never be laid out.
    pub fn new(size: usize, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if fleet.iter().any(|&len| len == 0) {
            return Err(ConfigError::ZeroLengthShip);
        }
        if let Some(&length) = fleet.iter().max() {
            if length > size {
                return Err(ConfigError::ShipTooLong { length, size });
            }
        }
        let required: usize = fleet.iter().map(|&len| 2 * (len + 1)).sum();
        let capacity = (size + 1) * (size + 1);
        if required > capacity {
            return Err(ConfigError::FleetTooDense {
                size,
                required,
                capacity,
            });
        }
        Ok(Self {
            size,
            fleet,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        })
    }

    /// Override the number of placement attempts per grid. Values below one
    /// are raised to one.
    pub fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.attempt_budget = budget.max(1);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ship lengths in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }

    /// Total number of ship cells in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }
}
