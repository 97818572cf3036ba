//! Rule engine for a two-player grid battle game.
//!
//! Each side hides a fleet of straight ships on a square grid. Ships may not
//! touch, not even diagonally. Players take turns firing at the other grid; a
//! hit or a sinking earns another shot, a miss passes the turn. The first side
//! to lose its whole fleet loses the match.

pub mod core;
pub mod game;
pub mod logging;
pub mod player;
#[cfg(feature = "cli")]
pub mod ui;

pub use crate::core::*;
pub use game::{Match, MatchError, MatchState, Side, TurnReport};
pub use logging::init_logging;
pub use player::{
    AutomatedCombatant, Combatant, ExternalCombatant, ScriptedTargets, TargetSource, TurnError,
};
#[cfg(feature = "cli")]
pub use player::StdinTargets;
