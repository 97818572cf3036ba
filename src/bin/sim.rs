use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, AutomatedCombatant, FleetGenerator, GameConfig, Match, MatchState, RngSource,
    Seat, Side,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let generator = FleetGenerator::new(&GameConfig::default());
    let g1 = generator.generate(&mut RngSource::new(&mut rng1), true);
    let g2 = generator.generate(&mut RngSource::new(&mut rng2), true);

    let p1 = AutomatedCombatant::new(RngSource::new(rng1));
    let p2 = AutomatedCombatant::new(RngSource::new(rng2));
    let mut game = Match::new(Side::new(Box::new(p1), g1), Side::new(Box::new(p2), g2));
    let state = game.run()?;

    let winner = match state {
        MatchState::Player1Won => Some("player1"),
        MatchState::Player2Won => Some("player2"),
        MatchState::InProgress => None,
    };

    let result = json!({
        "winner": winner,
        "state": serde_json::to_value(state)?,
        "turns": game.turn_counter(),
        "shots": {
            "player1": game.shots_fired(Seat::First),
            "player2": game.shots_fired(Seat::Second),
        },
        // Shots each player fired, in order: the opponent's grid history.
        "history": {
            "player1": serde_json::to_value(game.grid(Seat::Second).history())?,
            "player2": serde_json::to_value(game.grid(Seat::First).history())?,
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
