//! Match driver: alternates the two combatants, applying the extra-shot-on-hit
//! rule, until one fleet is gone.

use thiserror::Error;

use crate::core::{
    FleetGenerator, GameConfig, Grid, Seat, ShotOutcome, ShotRecord, UniformSource,
};
use crate::player::{Combatant, TurnError};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    InProgress,
    Player1Won,
    Player2Won,
}

impl MatchState {
    /// The winning seat, if the match is over.
    pub fn winner(self) -> Option<Seat> {
        match self {
            MatchState::InProgress => None,
            MatchState::Player1Won => Some(Seat::First),
            MatchState::Player2Won => Some(Seat::Second),
        }
    }

    fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::First => MatchState::Player1Won,
            Seat::Second => MatchState::Player2Won,
        }
    }
}

/// Errors that stop a match from advancing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("the match is already over")]
    AlreadyOver,
    #[error("{seat:?} could not take its turn: {source}")]
    Turn {
        seat: Seat,
        #[source]
        source: TurnError,
    },
}

/// What happened in one step of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Who fired.
    pub seat: Seat,
    pub shot: ShotRecord,
    /// State after the shot.
    pub state: MatchState,
}

/// One side: a combatant and the grid holding its own fleet.
pub struct Side {
    combatant: Box<dyn Combatant>,
    grid: Grid,
}

impl Side {
    pub fn new(combatant: Box<dyn Combatant>, grid: Grid) -> Self {
        Self { combatant, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// A match between two sides. The first seat fires first.
pub struct Match {
    sides: [Side; 2],
    turn_counter: usize,
    state: MatchState,
    shots: [usize; 2],
}

impl Match {
    /// Start a match from two prepared sides.
    pub fn new(first: Side, second: Side) -> Self {
        let mut m = Match {
            sides: [first, second],
            turn_counter: 0,
            state: MatchState::InProgress,
            shots: [0; 2],
        };
        m.update_state(Seat::First);
        m
    }

    /// Generate a random fleet for each combatant and start the match. A
    /// side's grid is concealed when its combatant asks for it.
    pub fn generate<S>(
        config: &GameConfig,
        first: Box<dyn Combatant>,
        second: Box<dyn Combatant>,
        source: &mut S,
    ) -> Self
    where
        S: UniformSource + ?Sized,
    {
        let generator = FleetGenerator::new(config);
        let first_grid = generator.generate(source, first.conceals_fleet());
        let second_grid = generator.generate(source, second.conceals_fleet());
        Match::new(Side::new(first, first_grid), Side::new(second, second_grid))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != MatchState::InProgress
    }

    /// Seat whose turn it is.
    pub fn active(&self) -> Seat {
        Seat::from_parity(self.turn_counter)
    }

    /// Number of turn hand-overs so far. Its parity selects the active seat.
    pub fn turn_counter(&self) -> usize {
        self.turn_counter
    }

    /// The grid holding `seat`'s own fleet.
    pub fn grid(&self, seat: Seat) -> &Grid {
        &self.sides[seat.index()].grid
    }

    /// Accepted shots fired by `seat`.
    pub fn shots_fired(&self, seat: Seat) -> usize {
        self.shots[seat.index()]
    }

    /// Let the active seat fire one accepted shot.
    pub fn step(&mut self) -> Result<TurnReport, MatchError> {
        if self.is_over() {
            return Err(MatchError::AlreadyOver);
        }
        let seat = self.active();
        let [first, second] = &mut self.sides;
        let (shooter, defender) = match seat {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        };

        let shot = shooter
            .combatant
            .take_turn(&mut defender.grid)
            .map_err(|source| MatchError::Turn { seat, source })?;
        defender.combatant.handle_incoming(shot);
        self.shots[seat.index()] += 1;

        self.update_state(seat);
        if shot.outcome == ShotOutcome::Miss && !self.is_over() {
            self.turn_counter += 1;
            log::debug!("{:?} missed at {}, turn passes to {:?}", seat, shot.coord, self.active());
        }
        Ok(TurnReport {
            seat,
            shot,
            state: self.state,
        })
    }

    /// Step until the match ends and return the final state.
    pub fn run(&mut self) -> Result<MatchState, MatchError> {
        while !self.is_over() {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Check both fleets, the shooter's opponent first.
    fn update_state(&mut self, shooter: Seat) {
        if !self.is_over() {
            let state = if self.grid(shooter.opponent()).is_fleet_eliminated() {
                MatchState::won_by(shooter)
            } else if self.grid(shooter).is_fleet_eliminated() {
                MatchState::won_by(shooter.opponent())
            } else {
                MatchState::InProgress
            };
            if state != MatchState::InProgress {
                log::info!(
                    "match over after {} + {} shots: {:?}",
                    self.shots[0],
                    self.shots[1],
                    state
                );
            }
            self.state = state;
        }
    }
}
