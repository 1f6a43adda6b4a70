use std::io;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, AiPlayer, Difficulty, GameSession, Player};

/// Random X against perfect O, one seed per side. The game runs against the
/// combined seed; the result is printed as a single JSON object.
fn main() -> anyhow::Result<()> {
    init_logging(None);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed_x> <seed_o>", args[0]);
        std::process::exit(1);
    }
    let seed_x: u64 = args[1].parse()?;
    let seed_o: u64 = args[2].parse()?;

    let x: Box<dyn Player> = Box::new(AiPlayer::new(Difficulty::Random));
    let o: Box<dyn Player> = Box::new(AiPlayer::new(Difficulty::Perfect));
    let rng = SmallRng::seed_from_u64(seed_x ^ seed_o.rotate_left(32));

    let mut session = GameSession::new(x, o, rng, io::sink());
    let status = session.run()?;
    let (engine, _) = session.into_parts();

    let moves: Vec<u8> = engine.history().iter().map(|mv| mv.position()).collect();
    let result = json!({
        "winner": status.winner().map(|m| m.to_string()),
        "moves": moves,
        "state": engine.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
