use crate::{
    board::Board,
    common::{Mark, Move, MoveError, PlayerError},
    game::GameStatus,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Short label used in announcements.
    fn name(&self) -> &str;

    /// Choose the next move for `mark` on `board`.
    ///
    /// A returned move may still be rejected by the engine (e.g. an occupied
    /// cell); the player is told through [`Player::handle_rejected_move`] and
    /// asked again.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> Result<Move, PlayerError>;

    /// Inform the player that its last proposal was refused.
    fn handle_rejected_move(&mut self, _err: MoveError) {}

    /// Inform the player of any accepted move, including its own.
    fn handle_move(&mut self, _mark: Mark, _mv: Move) {}

    /// Inform the player that the game has ended.
    fn handle_outcome(&mut self, _status: GameStatus) {}
}
