//! Win and draw evaluation.

use crate::board::Board;
use crate::common::{Mark, Outcome};
use crate::config::{line_mask, WIN_LINES};

/// First triple of [`WIN_LINES`] fully held by `mark`, if any.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let held = board.marks(mark);
    WIN_LINES
        .iter()
        .copied()
        .find(|line| held.contains(&line_mask(line)))
}

/// Mark owning a complete triple, regardless of who moved last.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::ALL
        .into_iter()
        .find(|&mark| winning_line(board, mark).is_some())
}

/// Outcome of the board right after `last` has moved.
///
/// The win check runs before the draw check, so a full board with a
/// completed line is a win.
pub fn evaluate(board: &Board, last: Mark) -> Outcome {
    if winning_line(board, last).is_some() {
        Outcome::Win(last)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Move;

    fn board_from(x: &[i64], o: &[i64]) -> Board {
        let mut board = Board::new();
        for &p in x {
            board.set(Move::from_position(p).unwrap(), Mark::X).unwrap();
        }
        for &p in o {
            board.set(Move::from_position(p).unwrap(), Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Mark::X), Outcome::InProgress);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn every_line_wins() {
        for line in WIN_LINES {
            let positions: Vec<i64> = line.iter().map(|&i| i as i64 + 1).collect();
            let board = board_from(&positions, &[]);
            assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
            assert_eq!(winning_line(&board, Mark::X), Some(line));

            let board = board_from(&[], &positions);
            assert_eq!(evaluate(&board, Mark::O), Outcome::Win(Mark::O));
        }
    }

    #[test]
    fn incomplete_line_in_progress() {
        let board = board_from(&[1, 2], &[5]);
        assert_eq!(evaluate(&board, Mark::O), Outcome::InProgress);
    }

    #[test]
    fn full_board_with_line_is_win_not_draw() {
        // X O X / O X O / O X X : X holds the 1-5-9 diagonal
        let board = board_from(&[1, 3, 5, 8, 9], &[2, 4, 6, 7]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = board_from(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(board.is_full());
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board, Mark::X), Outcome::Draw);
    }
}
