use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, AutomatedCombatant, ExternalCombatant, GameConfig, Match, MatchState,
    RngSource, Seat, StdinTargets, DEFAULT_FLEET, DEFAULT_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer. You fire first.
    Play(GameArgs),
    /// Watch two computer players fight it out.
    Watch(GameArgs),
}

#[derive(Args)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Width and height of each grid")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_FLEET,
        help = "Ship lengths, comma separated"
    )]
    fleet: Vec<usize>,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        GameConfig::new(self.size, self.fleet.clone()).context("invalid game configuration")
    }

    /// Independent generators for fleet layout and each computer player.
    fn rngs(&self) -> [SmallRng; 3] {
        match self.seed {
            Some(s) => [
                SmallRng::seed_from_u64(s),
                SmallRng::seed_from_u64(s.wrapping_add(1)),
                SmallRng::seed_from_u64(s.wrapping_add(2)),
            ],
            None => {
                let mut seed_rng = rand::rng();
                [
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                    SmallRng::from_rng(&mut seed_rng),
                ]
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Watch(args) => watch(args),
    }
}

fn play(args: GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    println!("Welcome to sea battle!");
    println!("Enter shots as two numbers: row then column, starting from 1.");
    println!("X = hit, T = miss, · = known empty, ■ = your ship.\n");

    let [layout_rng, bot_rng, _] = args.rngs();
    let mut layout = RngSource::new(layout_rng);
    let human = Box::new(ExternalCombatant::new(StdinTargets::stdio()));
    let computer = Box::new(AutomatedCombatant::new(RngSource::new(bot_rng)));
    let mut game = Match::generate(&config, human, computer, &mut layout);

    while !game.is_over() {
        if game.active() == Seat::First {
            println!();
            ui::print_boards(
                "Your board",
                game.grid(Seat::First),
                "Computer's board",
                game.grid(Seat::Second),
            );
        }
        let report = game.step()?;
        if report.seat == Seat::Second {
            println!(
                "Computer fires at {}: {}",
                report.shot.coord,
                ui::outcome_message(report.shot.outcome)
            );
        }
    }

    println!();
    ui::print_boards(
        "Your board",
        game.grid(Seat::First),
        "Computer's board",
        game.grid(Seat::Second),
    );
    match game.state() {
        MatchState::Player1Won => println!("\nYou won! Every enemy ship is at the bottom."),
        MatchState::Player2Won => println!("\nThe computer won. Better luck next time."),
        MatchState::InProgress => {}
    }
    Ok(())
}

fn watch(args: GameArgs) -> anyhow::Result<()> {
    let config = args.config()?;
    let [layout_rng, rng1, rng2] = args.rngs();
    let mut layout = RngSource::new(layout_rng);
    let first = Box::new(AutomatedCombatant::new(RngSource::new(rng1)));
    let second = Box::new(AutomatedCombatant::new(RngSource::new(rng2)));
    let mut game = Match::generate(&config, first, second, &mut layout);

    while !game.is_over() {
        let report = game.step()?;
        println!(
            "{:?} fires at {}: {:?}",
            report.seat, report.shot.coord, report.shot.outcome
        );
    }
    println!();
    let mut first_grid = game.grid(Seat::First).clone();
    let mut second_grid = game.grid(Seat::Second).clone();
    first_grid.set_concealed(false);
    second_grid.set_concealed(false);
    ui::print_boards("Player 1", &first_grid, "Player 2", &second_grid);
    println!("\n{}", ui::result_message(game.state()));
    Ok(())
}
