#![cfg(feature = "cli")]

use std::io::Cursor;

use seabattle::{
    ui, CellState, Combatant, Coordinate, ExternalCombatant, Grid, Orientation, Ship, ShotOutcome,
    StdinTargets,
};

#[test]
fn typed_shots_are_one_based() {
    let mut grid = Grid::new(6, true);
    grid.place_ship(Ship::new(2, Orientation::Horizontal, Coordinate::new(0, 0)))
        .unwrap();

    let input = Cursor::new("1 1\n");
    let mut player = ExternalCombatant::new(StdinTargets::new(input, Vec::new()));
    let shot = player.take_turn(&mut grid).unwrap();
    assert_eq!(shot.coord, Coordinate::new(0, 0));
    assert_eq!(shot.outcome, ShotOutcome::Hit);

    let out = String::from_utf8(player.into_source().into_output()).unwrap();
    assert!(out.contains("Your shot (row col, 1-6)"));
    assert!(out.contains(ui::outcome_message(ShotOutcome::Hit)));
}

#[test]
fn repeated_and_off_board_shots_reprompt() {
    let mut grid = Grid::new(3, false);
    grid.shoot(Coordinate::new(1, 1)).unwrap();

    let input = Cursor::new("2 2\n4 1\nx y\n3 3\n");
    let mut player = ExternalCombatant::new(StdinTargets::new(input, Vec::new()));
    let shot = player.take_turn(&mut grid).unwrap();
    assert_eq!(shot.coord, Coordinate::new(2, 2));
    assert_eq!(grid.cell(Coordinate::new(2, 2)), Some(CellState::Miss));

    let out = String::from_utf8(player.into_source().into_output()).unwrap();
    assert!(out.contains("You already fired at 2,2"));
    assert!(out.contains("4,1 is off the board"));
    assert!(out.contains("'x' is not a number"));
}

#[test]
fn rendered_board_shows_revealed_contour() {
    let mut grid = Grid::new(3, false);
    grid.place_ship(Ship::new(1, Orientation::Horizontal, Coordinate::new(0, 0)))
        .unwrap();
    grid.shoot(Coordinate::new(0, 0)).unwrap();
    assert_eq!(
        ui::render_grid(&grid),
        "  | 1 | 2 | 3 |\n1 | X | · | O |\n2 | · | · | O |\n3 | O | O | O |"
    );
}
