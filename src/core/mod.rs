//! Core rule engine
//!
//! Grid and fleet state, placement validation, shot resolution and random
//! fleet generation. Nothing in here does I/O; randomness comes in through
//! [`UniformSource`].

pub mod common;
pub mod config;
pub mod coord;
pub mod fleet;
pub mod grid;
pub mod random;
pub mod ship;

// Re-export commonly used types
pub use common::{
    CellState, ConfigError, GridError, InvariantViolation, PlacementError, Seat, ShotError,
    ShotOutcome,
};
pub use config::{GameConfig, DEFAULT_ATTEMPT_BUDGET, DEFAULT_FLEET, DEFAULT_SIZE};
pub use coord::Coordinate;
pub use fleet::FleetGenerator;
pub use grid::{Grid, ShotRecord};
pub use random::{RngSource, UniformSource};
pub use ship::{Orientation, Ship};
