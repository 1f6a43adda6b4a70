use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{Mark, Move, MoveError, PlayerError},
    config::CELL_COUNT,
    rules,
};
use rand::{rngs::SmallRng, Rng};

use super::player::Player;

/// How hard the AI plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Random,
    /// Full-depth negamax; never loses.
    #[default]
    Perfect,
}

/// Computer player. Ties between equally good moves are broken with the RNG.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Random => "Random AI",
            Difficulty::Perfect => "Perfect AI",
        }
    }

    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<Move, PlayerError> {
        let candidates: Vec<Move> = match self.difficulty {
            Difficulty::Random => board.empty_moves().collect(),
            Difficulty::Perfect => best_moves(board, mark),
        };
        if candidates.is_empty() {
            return Err(PlayerError::Invalid(MoveError::GameOver));
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}

/// Score every empty cell for `mark` and return those with the top score.
pub fn best_moves(board: &Board, mark: Mark) -> Vec<Move> {
    let mut scratch = *board;
    let mut best = Vec::new();
    let mut best_score = i32::MIN;

    for mv in board.empty_moves() {
        let score = score_move(&mut scratch, mv, mark);
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(mv);
        }
    }
    best
}

/// Exact negamax value of `mark` playing `mv` from `mark`'s point of view.
pub fn score_move(board: &mut Board, mv: Move, mark: Mark) -> i32 {
    if board.set(mv, mark).is_err() {
        return i32::MIN;
    }
    let score = -negamax(board, mark.opponent(), -i32::MAX, i32::MAX);
    board.unset(mv);
    score
}

/// Value of the position for `to_move`. Wins score higher the sooner they
/// happen: a win with `e` empty cells left is worth `e + 1`.
fn negamax(board: &mut Board, to_move: Mark, mut alpha: i32, beta: i32) -> i32 {
    let empty = (CELL_COUNT - board.filled()) as i32;
    if rules::winning_line(board, to_move.opponent()).is_some() {
        return -(empty + 1);
    }
    if empty == 0 {
        return 0;
    }

    let mut best = -i32::MAX;
    for mv in board.empty_moves() {
        if board.set(mv, to_move).is_err() {
            continue;
        }
        let score = -negamax(board, to_move.opponent(), -beta, -alpha);
        board.unset(mv);
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

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

    fn pos(p: i64) -> Move {
        Move::from_position(p).unwrap()
    }

    #[test]
    fn takes_immediate_win() {
        // X X . / O O . / . . .
        let board = board_from(&[1, 2], &[4, 5]);
        assert_eq!(best_moves(&board, Mark::X), vec![pos(3)]);
    }

    #[test]
    fn blocks_opponent_win() {
        // X . . / O O . / X . .  O threatens 6
        let board = board_from(&[1, 7], &[4, 5]);
        assert_eq!(best_moves(&board, Mark::X), vec![pos(6)]);
    }

    #[test]
    fn empty_board_is_a_draw() {
        let mut board = Board::new();
        for mv in Board::new().empty_moves() {
            assert!(score_move(&mut board, mv, Mark::X) <= 0);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn random_picks_empty_cell() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = board_from(&[1, 2, 3, 4], &[5, 6, 7, 8]);
        let mut ai = AiPlayer::new(Difficulty::Random);
        assert_eq!(ai.select_move(&mut rng, &board, Mark::X), Ok(pos(9)));
    }

    #[test]
    fn full_board_has_no_move() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = board_from(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        let mut ai = AiPlayer::default();
        assert_eq!(
            ai.select_move(&mut rng, &board, Mark::O),
            Err(PlayerError::Invalid(MoveError::GameOver))
        );
    }
}
