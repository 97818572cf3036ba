//! Combatant trait and implementations
//!
//! A combatant decides where to fire. This module provides:
//! - AutomatedCombatant: uniform random targeting
//! - ExternalCombatant: targets supplied by a [`TargetSource`] such as a human
//!   at a terminal or a scripted replay

use thiserror::Error;

use crate::core::{Coordinate, Grid, GridError, InvariantViolation, ShotError, ShotRecord};

/// Why a combatant could not complete its turn.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The combatant stopped supplying targets.
    #[error("combatant stopped choosing targets")]
    Forfeit,
    /// The target grid has no cell left to fire at.
    #[error("no untargeted cells remain")]
    NoTargetsLeft,
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Interface implemented by both sides of a match.
pub trait Combatant {
    /// Pick the next cell to fire at. `target` is the opponent's grid; hidden
    /// ships stay hidden only if the implementation looks at
    /// [`Grid::visible_state`]. Return `None` to give up.
    fn choose_target(&mut self, target: &Grid) -> Option<Coordinate>;

    /// Whether this side's own fleet is hidden from the viewer.
    fn conceals_fleet(&self) -> bool {
        true
    }

    /// A chosen target was refused; another one will be requested.
    fn handle_rejected(&mut self, _error: &ShotError) {}

    /// Result of our own accepted shot.
    fn handle_outcome(&mut self, _shot: ShotRecord) {}

    /// The opponent fired at our grid.
    fn handle_incoming(&mut self, _shot: ShotRecord) {}

    /// Choose targets until one is accepted by `target`, then report it.
    ///
    /// Refused shots (out of bounds, already targeted) are not errors here:
    /// the combatant is told and asked again.
    fn take_turn(&mut self, target: &mut Grid) -> Result<ShotRecord, TurnError> {
        if target.untargeted_count() == 0 {
            return Err(TurnError::NoTargetsLeft);
        }
        loop {
            let coord = self.choose_target(target).ok_or(TurnError::Forfeit)?;
            match target.shoot(coord) {
                Ok(outcome) => {
                    let shot = ShotRecord { coord, outcome };
                    self.handle_outcome(shot);
                    return Ok(shot);
                }
                Err(GridError::Shot(err)) => {
                    log::trace!("target refused: {}", err);
                    self.handle_rejected(&err);
                }
                Err(GridError::Invariant(violation)) => return Err(violation.into()),
            }
        }
    }
}

/// Supplies target coordinates from outside the engine.
///
/// Implementations only need to produce well-formed coordinates; bounds and
/// repeats are checked by the grid and reported through [`TargetSource::rejected`].
pub trait TargetSource {
    /// Next coordinate to fire at, or `None` when no more input is available.
    fn next_target(&mut self, target: &Grid) -> Option<Coordinate>;

    fn rejected(&mut self, _error: &ShotError) {}

    fn outcome(&mut self, _shot: ShotRecord) {}

    fn incoming(&mut self, _shot: ShotRecord) {}
}

/// Combatant that fires wherever its [`TargetSource`] says.
pub struct ExternalCombatant<T> {
    source: T,
}

impl<T: TargetSource> ExternalCombatant<T> {
    pub fn new(source: T) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn into_source(self) -> T {
        self.source
    }
}

impl<T: TargetSource> Combatant for ExternalCombatant<T> {
    fn choose_target(&mut self, target: &Grid) -> Option<Coordinate> {
        self.source.next_target(target)
    }

    /// The person behind the source gets to see their own ships.
    fn conceals_fleet(&self) -> bool {
        false
    }

    fn handle_rejected(&mut self, error: &ShotError) {
        self.source.rejected(error)
    }

    fn handle_outcome(&mut self, shot: ShotRecord) {
        self.source.outcome(shot)
    }

    fn handle_incoming(&mut self, shot: ShotRecord) {
        self.source.incoming(shot)
    }
}

pub mod ai;
pub use ai::AutomatedCombatant;

pub mod scripted;
pub use scripted::ScriptedTargets;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub use cli::StdinTargets;
