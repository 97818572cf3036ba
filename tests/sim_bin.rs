#![cfg(feature = "cli")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["turns"].is_u64());
    assert!(v["shots"]["player1"].as_u64().unwrap() > 0);
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["42", "7"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_binary_rejects_missing_seeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn sim_binary_reports_serialized_history() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["5", "6"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid json");

    let state: seabattle::MatchState = serde_json::from_value(v["state"].clone()).unwrap();
    assert_ne!(state, seabattle::MatchState::InProgress);

    for player in ["player1", "player2"] {
        let history: Vec<seabattle::ShotRecord> =
            serde_json::from_value(v["history"][player].clone()).unwrap();
        assert_eq!(history.len() as u64, v["shots"][player].as_u64().unwrap());
    }
}
