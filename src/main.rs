#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, shared_input, AiPlayer, CliPlayer, Difficulty, GameSession, GameStatus, Mark,
    Player,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Console tic-tac-toe", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (overrides TICTACTOE_LOG).
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Side {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<Side> for Mark {
    fn from(side: Side) -> Mark {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two people take turns at the same console (default).
    Local,
    /// Play against the computer.
    Ai {
        #[arg(long, value_enum, default_value_t = Side::X, help = "Mark you play (X moves first)")]
        human: Side,
        #[arg(long, value_enum, default_value_t = Difficulty::Perfect)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players.
    Watch {
        #[arg(long, value_enum, default_value_t = Difficulty::Random)]
        x_difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Perfect)]
        o_difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let input = shared_input(std::io::stdin().lock());
    let (x, o, rng): (Box<dyn Player>, Box<dyn Player>, SmallRng) =
        match cli.command.unwrap_or(Commands::Local) {
            Commands::Local => {
                println!("Starting a two-player game. X moves first.");
                let first: Box<dyn Player> = Box::new(CliPlayer::stdio("Player 1", input.clone()));
                let second: Box<dyn Player> = Box::new(CliPlayer::stdio("Player 2", input));
                (first, second, make_rng(None))
            }
            Commands::Ai {
                human,
                difficulty,
                seed,
            } => {
                println!("Starting a game against the computer ({:?}).", difficulty);
                let rng = make_rng(seed);
                let you: Box<dyn Player> = Box::new(CliPlayer::stdio("You", input));
                let ai: Box<dyn Player> = Box::new(AiPlayer::new(difficulty));
                match Mark::from(human) {
                    Mark::X => (you, ai, rng),
                    Mark::O => (ai, you, rng),
                }
            }
            Commands::Watch {
                x_difficulty,
                o_difficulty,
                seed,
            } => {
                println!("Starting a computer vs computer game...");
                let x: Box<dyn Player> = Box::new(AiPlayer::new(x_difficulty));
                let o: Box<dyn Player> = Box::new(AiPlayer::new(o_difficulty));
                (x, o, make_rng(seed))
            }
        };

    let mut session = GameSession::new(x, o, rng, std::io::stdout());
    match session.run() {
        Ok(GameStatus::Won(mark)) => log::info!("winner: {}", mark),
        Ok(status) => log::info!("final status: {:?}", status),
        Err(e) => eprintln!("Game ended early: {}", e),
    }
    Ok(())
}
