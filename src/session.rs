#![cfg(feature = "std")]

//! Console game loop: asks players for moves, reports rejections, renders
//! the board after every accepted move and announces the result.

use std::boxed::Box;
use std::io::Write;

use anyhow::bail;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    common::{Mark, MoveError, PlayerError},
    game::{GameEngine, GameStatus},
    player::Player,
    rules,
};

/// One game between two players, X first.
pub struct GameSession<W> {
    engine: GameEngine,
    players: [Box<dyn Player>; 2],
    rng: SmallRng,
    out: W,
}

fn seat(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

impl<W: Write> GameSession<W> {
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>, rng: SmallRng, out: W) -> Self {
        Self {
            engine: GameEngine::new(),
            players: [x, o],
            rng,
            out,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consume the session, returning the engine and the output sink.
    pub fn into_parts(self) -> (GameEngine, W) {
        (self.engine, self.out)
    }

    /// Play until the game reaches a terminal state.
    ///
    /// Invalid proposals are reported and the same player is asked again.
    /// Only a departing player or a failing output ends the session early.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        info!(
            "new game: X={} O={}",
            self.players[0].name(),
            self.players[1].name()
        );
        writeln!(self.out, "Positions:")?;
        write!(self.out, "{}", self.engine.board().guide())?;

        while let Some(mark) = self.engine.current_mark() {
            let player = &mut self.players[seat(mark)];
            let mv = match player.select_move(&mut self.rng, self.engine.board(), mark) {
                Ok(mv) => mv,
                Err(PlayerError::Invalid(err)) => {
                    self.reject(mark, err)?;
                    continue;
                }
                Err(PlayerError::Disconnected) => {
                    warn!("player {} ({}) disconnected", mark, player.name());
                    bail!("player {} ({}) left the game", mark, player.name());
                }
            };

            if let Err(err) = self.engine.play(mv) {
                self.reject(mark, err)?;
                continue;
            }

            writeln!(
                self.out,
                "\n{} ({}) takes {}:",
                mark,
                self.players[seat(mark)].name(),
                mv
            )?;
            write!(self.out, "{}", self.engine.board())?;
            for p in self.players.iter_mut() {
                p.handle_move(mark, mv);
            }
        }

        let status = self.engine.status();
        self.announce(status)?;
        for p in self.players.iter_mut() {
            p.handle_outcome(status);
        }
        info!("game over after {} moves: {:?}", self.engine.move_count(), status);
        Ok(status)
    }

    fn reject(&mut self, mark: Mark, err: MoveError) -> anyhow::Result<()> {
        debug!("rejected move from {}: {:?}", mark, err);
        writeln!(self.out, "✗ {}", err)?;
        self.players[seat(mark)].handle_rejected_move(err);
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> anyhow::Result<()> {
        match status {
            GameStatus::Won(mark) => {
                let name = self.players[seat(mark)].name();
                write!(self.out, "\nPlayer {} ({}) wins!", mark, name)?;
                if let Some(line) = rules::winning_line(self.engine.board(), mark) {
                    write!(
                        self.out,
                        " Three in a row at {}, {}, {}.",
                        line[0] + 1,
                        line[1] + 1,
                        line[2] + 1
                    )?;
                }
                writeln!(self.out)?;
            }
            GameStatus::Drawn => writeln!(self.out, "\nIt's a draw!")?,
            GameStatus::AwaitingMove(_) => {}
        }
        self.out.flush()?;
        Ok(())
    }
}
