#![cfg(feature = "std")]

use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Mark, Move, MoveError, PlayerError},
};

use super::player::Player;

/// Line source shared by every console player in one process.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Wrap a reader so several players can take turns reading lines from it.
pub fn shared_input<R: BufRead>(reader: R) -> SharedInput<R> {
    Rc::new(RefCell::new(reader))
}

/// Interactive player reading one position per line.
pub struct CliPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process console.
    pub fn stdio(name: impl Into<String>, input: SharedInput<StdinLock<'static>>) -> Self {
        Self::new(name, input, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Where prompts are written.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prompt until a line that is not a help request arrives.
    /// `Ok(None)` means the player is gone.
    fn read_proposal(&mut self, board: &Board, mark: Mark) -> io::Result<Option<String>> {
        loop {
            write!(
                self.output,
                "\nPlayer {} ({}), choose a position [1-9] (or 'help'): ",
                mark, self.name
            )?;
            self.output.flush()?;

            // Raw bytes: a line that is not UTF-8 is bad input, not a lost console.
            let mut raw = Vec::new();
            if self.input.borrow_mut().read_until(b'\n', &mut raw)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();

            if line.eq_ignore_ascii_case("help") || line == "?" {
                print_help(&mut self.output, board)?;
                continue;
            }
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            return Ok(Some(line.to_string()));
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<Move, PlayerError> {
        match self.read_proposal(board, mark) {
            Ok(Some(line)) => Ok(Move::parse(&line)?),
            Ok(None) => Err(PlayerError::Disconnected),
            Err(e) => {
                warn!("console I/O failed for {}: {}", self.name, e);
                Err(PlayerError::Disconnected)
            }
        }
    }

    fn handle_rejected_move(&mut self, err: MoveError) {
        if matches!(err, MoveError::Parse | MoveError::OutOfRange(_)) {
            if let Err(e) = writeln!(self.output, "   Hint: type 'help' to see the position numbers.") {
                warn!("console I/O failed for {}: {}", self.name, e);
            }
        }
    }
}

fn print_help<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "\nEnter the number of a free cell:")?;
    write!(out, "{}", board.guide())?;
    writeln!(out, "Type 'quit' to leave the game.")
}
