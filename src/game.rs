use alloc::vec::Vec;

use log::debug;

use crate::{
    board::{Board, BoardState},
    common::{Mark, Move, MoveError, Outcome, StateError},
    rules,
};

/// Turn controller states. `Won` and `Drawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    AwaitingMove(Mark),
    Won(Mark),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            GameStatus::AwaitingMove(_) => Outcome::InProgress,
            GameStatus::Won(mark) => Outcome::Win(mark),
            GameStatus::Drawn => Outcome::Draw,
        }
    }
}

/// Serializable overall game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub status: GameStatus,
    pub history: Vec<Move>,
}

/// Core game logic: owns the board and enforces turn order.
///
/// The engine performs no I/O. Every rejected move leaves the board, the
/// history and the active mark exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a new engine with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingMove(Mark::X),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Outcome derived from the current status.
    pub fn outcome(&self) -> Outcome {
        self.status.outcome()
    }

    /// Mark whose turn it is, or `None` once the game is over.
    pub fn current_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::AwaitingMove(mark) => Some(mark),
            _ => None,
        }
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Apply a move for the active mark and evaluate the result.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        let mark = self.current_mark().ok_or(MoveError::GameOver)?;
        self.board.set(mv, mark)?;
        self.history.push(mv);

        let outcome = rules::evaluate(&self.board, mark);
        self.status = match outcome {
            Outcome::Win(winner) => GameStatus::Won(winner),
            Outcome::Draw => GameStatus::Drawn,
            Outcome::InProgress => GameStatus::AwaitingMove(mark.opponent()),
        };
        debug!("{} played {} -> {:?}", mark, mv, self.status);
        Ok(outcome)
    }

    /// Parse one line of player input and play it.
    pub fn play_input(&mut self, input: &str) -> Result<Outcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.play(Move::parse(input)?)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            status: self.status,
            history: self.history.clone(),
        }
    }

    /// Restore an engine from a previously saved state.
    ///
    /// The history is replayed from an empty board and must reproduce both
    /// the recorded board and the recorded status.
    pub fn from_state(state: GameState) -> Result<Self, StateError> {
        let board = Board::try_from(state.board)?;
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x != o && x != o + 1 {
            return Err(StateError::MarkCount { x, o });
        }

        let mut engine = GameEngine::new();
        for &mv in &state.history {
            engine
                .play(mv)
                .map_err(|_| StateError::HistoryMismatch)?;
        }
        if engine.board != board {
            return Err(StateError::HistoryMismatch);
        }
        if engine.status != state.status {
            return Err(StateError::StatusMismatch);
        }
        Ok(engine)
    }
}
