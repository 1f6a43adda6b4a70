//! Common types for tic-tac-toe: marks, cells, moves, outcomes and errors.

use core::fmt;
use core::num::IntErrorKind;

use crate::config::{BOARD_SIDE, CELL_COUNT};

/// Symbol placed by a player. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board position, stored as a zero-based cell index in `0..9`.
///
/// Only the range-checked constructors build a `Move`, so `index()` is always
/// a valid cell. Whether the cell is free is decided by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8", into = "u8"))]
pub struct Move(u8);

impl Move {
    /// Build a move from a zero-based cell index.
    pub fn from_index(index: usize) -> Result<Move, MoveError> {
        if index < CELL_COUNT {
            Ok(Move(index as u8))
        } else {
            let position = i64::try_from(index)
                .ok()
                .and_then(|i| i.checked_add(1))
                .unwrap_or(i64::MAX);
            Err(MoveError::OutOfRange(position))
        }
    }

    /// Build a move from a one-based position as typed by a player.
    pub fn from_position(position: i64) -> Result<Move, MoveError> {
        if (1..=CELL_COUNT as i64).contains(&position) {
            Ok(Move((position - 1) as u8))
        } else {
            Err(MoveError::OutOfRange(position))
        }
    }

    /// Parse one line of player input into a move.
    ///
    /// Surrounding whitespace is ignored. Integers too large for `i64` are
    /// reported as out of range rather than unparseable.
    pub fn parse(input: &str) -> Result<Move, MoveError> {
        let position = match input.trim().parse::<i64>() {
            Ok(n) => n,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(MoveError::Parse),
            },
        };
        Move::from_position(position)
    }

    /// Zero-based cell index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based position.
    pub fn position(self) -> u8 {
        self.0 + 1
    }

    /// Row and column of the cell.
    pub fn coords(self) -> (usize, usize) {
        (self.index() / BOARD_SIDE, self.index() % BOARD_SIDE)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

impl TryFrom<u8> for Move {
    type Error = MoveError;

    /// Converts a one-based position.
    fn try_from(position: u8) -> Result<Self, Self::Error> {
        Move::from_position(position as i64)
    }
}

impl From<Move> for u8 {
    fn from(mv: Move) -> u8 {
        mv.position()
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Reasons a requested move is rejected. All of them leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Input was not an integer.
    Parse,
    /// Integer was outside `1..=9`; carries the one-based value given.
    OutOfRange(i64),
    /// Target cell already holds a mark.
    Occupied(Move),
    /// The game has reached a terminal state.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Parse => write!(f, "Not a number - enter a position from 1 to 9"),
            MoveError::OutOfRange(n) => {
                write!(f, "Position {} is out of range - enter a position from 1 to 9", n)
            }
            MoveError::Occupied(mv) => write!(f, "Position {} is already taken", mv),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// Errors raised when restoring a game from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// A cell is claimed by both marks.
    Overlap,
    /// Mark counts break alternation (X must have the same count as O or one more).
    MarkCount { x: usize, o: usize },
    /// Recorded history does not replay to the recorded board.
    HistoryMismatch,
    /// Recorded status disagrees with the board.
    StatusMismatch,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Overlap => write!(f, "Cell marked by both players"),
            StateError::MarkCount { x, o } => {
                write!(f, "Invalid mark counts: X={} O={}", x, o)
            }
            StateError::HistoryMismatch => write!(f, "Move history does not match the board"),
            StateError::StatusMismatch => write!(f, "Game status does not match the board"),
        }
    }
}

/// Failure to obtain a move from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// The player offered a move that failed validation.
    Invalid(MoveError),
    /// The player has gone away (closed input, quit command).
    Disconnected,
}

impl From<MoveError> for PlayerError {
    fn from(err: MoveError) -> Self {
        PlayerError::Invalid(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Invalid(e) => write!(f, "{}", e),
            PlayerError::Disconnected => write!(f, "Player disconnected"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for StateError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
