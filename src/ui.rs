//! Text rendering and player-facing messages for terminal hosts.

use std::fmt::Write as _;

use crate::core::{CellState, Grid, ShotError, ShotOutcome};
use crate::game::MatchState;

/// Glyph for a cell as shown to an onlooker.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Ship => '■',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Revealed => '·',
    }
}

/// Render a grid with 1-based row and column labels. Ships stay hidden on a
/// concealed grid.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from("  |");
    for c in 1..=grid.size() {
        let _ = write!(out, " {} |", c);
    }
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "\n{} |", r + 1);
        for (_, state) in row {
            let _ = write!(out, " {} |", glyph(state));
        }
    }
    out
}

/// Print two grids one after the other under their titles.
pub fn print_boards(own_title: &str, own: &Grid, enemy_title: &str, enemy: &Grid) {
    println!("{}:", own_title);
    println!("{}", render_grid(own));
    println!();
    println!("{}:", enemy_title);
    println!("{}", render_grid(enemy));
}

pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit! Fire again.",
        ShotOutcome::Sunk => "Ship destroyed! Fire again.",
    }
}

pub fn rejection_message(error: &ShotError) -> String {
    match error {
        ShotError::OutOfBounds(c) => format!("{} is off the board, try again.", c),
        ShotError::AlreadyTargeted(c) => format!("You already fired at {}, try again.", c),
    }
}

/// Closing line for a finished match, from the first seat's point of view.
pub fn result_message(state: MatchState) -> &'static str {
    match state {
        MatchState::InProgress => "The match is still going.",
        MatchState::Player1Won => "Player 1 wins!",
        MatchState::Player2Won => "Player 2 wins!",
    }
}
