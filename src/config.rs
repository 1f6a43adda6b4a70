use crate::bitboard::BitBoard;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Occupancy mask for a single mark.
pub type BB = BitBoard<u16, BOARD_SIDE>;

/// The 8 winning triples of zero-based cell indices: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Environment variable holding the log level (`error`, `warn`, `info`, ...).
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

/// Cell mask for each entry of [`WIN_LINES`].
pub fn line_mask(line: &[usize; 3]) -> BB {
    BB::from_indices(line.iter().copied()).unwrap_or_default()
}
