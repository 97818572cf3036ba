#![cfg(feature = "serde")]

use seabattle::{Coordinate, MatchState, Seat, ShotOutcome, ShotRecord, TurnReport};

#[test]
fn shot_record_json_roundtrip() {
    let shot = ShotRecord {
        coord: Coordinate::new(2, 4),
        outcome: ShotOutcome::Sunk,
    };
    let json = serde_json::to_value(shot).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"coord": {"row": 2, "col": 4}, "outcome": "Sunk"})
    );
    let back: ShotRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, shot);
}

#[test]
fn turn_report_json_roundtrip() {
    let report = TurnReport {
        seat: Seat::Second,
        shot: ShotRecord {
            coord: Coordinate::new(0, 0),
            outcome: ShotOutcome::Miss,
        },
        state: MatchState::InProgress,
    };
    let text = serde_json::to_string(&report).unwrap();
    let back: TurnReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back, report);
}
