//! Game board state, one occupancy `BitBoard` per mark.

use core::fmt;

use crate::common::{Cell, Mark, Move, MoveError, StateError};
use crate::config::{BB, BOARD_SIDE, CELL_COUNT};

/// Serializable board state for saving or reporting games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
}

/// Main board state: which cells hold X and which hold O.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Occupancy mask of `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Mask of all marked cells.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Contents of the cell at a zero-based index. Indices past the board read as empty.
    pub fn cell(&self, index: usize) -> Cell {
        if self.x.get(index).unwrap_or(false) {
            Cell::Marked(Mark::X)
        } else if self.o.get(index).unwrap_or(false) {
            Cell::Marked(Mark::O)
        } else {
            Cell::Empty
        }
    }

    /// All cells in index order.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        core::array::from_fn(|i| self.cell(i))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks(mark).count_ones()
    }

    /// Total number of marks on the board.
    pub fn filled(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Returns `true` when the cell under `mv` is free.
    pub fn is_free(&self, mv: Move) -> bool {
        self.cell(mv.index()).is_empty()
    }

    /// Moves onto every empty cell, in index order.
    pub fn empty_moves(&self) -> impl Iterator<Item = Move> {
        (!self.occupied())
            .indices()
            .filter_map(|i| Move::from_index(i).ok())
    }

    /// Mark the cell under `mv`. Never overwrites an existing mark.
    pub fn set(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        if !self.is_free(mv) {
            return Err(MoveError::Occupied(mv));
        }
        let bits = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        // `Move` is always within the board.
        bits.set(mv.index()).map_err(|_| MoveError::OutOfRange(mv.position() as i64))
    }

    /// Clear the cell under `mv`. Used by search to undo trial moves.
    pub(crate) fn unset(&mut self, mv: Move) {
        let _ = self.x.clear(mv.index());
        let _ = self.o.clear(mv.index());
    }

    /// Board layout with the one-based position number in every empty cell.
    pub fn guide(&self) -> Guide<'_> {
        Guide(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, numbered: bool) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..BOARD_SIDE {
                let index = row * BOARD_SIDE + col;
                let ch = match self.cell(index) {
                    Cell::Marked(mark) => mark.symbol(),
                    Cell::Empty if numbered => (b'1' + index as u8) as char,
                    Cell::Empty => ' ',
                };
                if col > 0 {
                    f.write_str("|")?;
                }
                write!(f, " {} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the board as three rows separated by `---+---+---` lines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("x", &self.x)
            .field("o", &self.o)
            .finish()
    }
}

/// See [`Board::guide`].
pub struct Guide<'a>(&'a Board);

impl fmt::Display for Guide<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, true)
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells() }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = StateError;

    /// Rebuilds the masks. Only structural checks; turn order is checked by the engine.
    fn try_from(state: BoardState) -> Result<Self, StateError> {
        let mut board = Board::new();
        for (i, cell) in state.cells.iter().enumerate() {
            if let Cell::Marked(mark) = cell {
                let mv = Move::from_index(i).map_err(|_| StateError::Overlap)?;
                board.set(mv, *mark).map_err(|_| StateError::Overlap)?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(position: i64) -> Move {
        Move::from_position(position).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_moves().count(), 9);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn set_refuses_occupied_cell() {
        let mut board = Board::new();
        board.set(mv(5), Mark::X).unwrap();
        assert_eq!(board.set(mv(5), Mark::O), Err(MoveError::Occupied(mv(5))));
        assert_eq!(board.cell(4), Cell::Marked(Mark::X));
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn unset_clears_cell() {
        let mut board = Board::new();
        board.set(mv(1), Mark::O).unwrap();
        board.unset(mv(1));
        assert!(board.is_free(mv(1)));
    }

    #[test]
    fn renders_rows_and_separators() {
        let mut board = Board::new();
        board.set(mv(1), Mark::X).unwrap();
        board.set(mv(2), Mark::O).unwrap();
        board.set(mv(5), Mark::X).unwrap();
        let text = board.to_string();
        let expected = " X | O |   \n---+---+---\n   | X |   \n---+---+---\n   |   |   \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn guide_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(mv(9), Mark::O).unwrap();
        let text = board.guide().to_string();
        assert!(text.starts_with(" 1 | 2 | 3 \n"));
        assert!(text.ends_with(" 7 | 8 | O \n"));
    }

    #[test]
    fn state_roundtrip() {
        let mut board = Board::new();
        board.set(mv(3), Mark::X).unwrap();
        board.set(mv(7), Mark::O).unwrap();
        let state = BoardState::from(&board);
        assert_eq!(Board::try_from(state).unwrap(), board);
    }
}
