use std::io::{self, Cursor};

use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::prelude::*;

fn humans(script: &str) -> GameSession<Vec<u8>> {
    let input = shared_input(Cursor::new(script.as_bytes().to_vec()));
    let x: Box<dyn Player> = Box::new(CliPlayer::new("alice", input.clone(), io::sink()));
    let o: Box<dyn Player> = Box::new(CliPlayer::new("bob", input, io::sink()));
    GameSession::new(x, o, SmallRng::seed_from_u64(0), Vec::new())
}

fn output(session: GameSession<Vec<u8>>) -> String {
    let (_, out) = session.into_parts();
    String::from_utf8(out).unwrap()
}

#[test]
fn scripted_win_with_bad_input() {
    // X: 1, junk, 10, 5 (after retries), 9 ; O: 1 (taken), 2, 3
    let mut session = humans("1\n1\n2\nabc\n10\n5\n3\n9\n");
    let status = session.run().unwrap();
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(session.engine().move_count(), 5);

    let text = output(session);
    assert!(text.contains("✗ Position 1 is already taken"));
    assert!(text.contains("✗ Not a number"));
    assert!(text.contains("✗ Position 10 is out of range"));
    assert!(text.contains("Player X (alice) wins! Three in a row at 1, 5, 9."));
}

#[test]
fn scripted_draw() {
    let mut session = humans("1\n2\n3\n5\n4\n6\n8\n7\n9\n");
    assert_eq!(session.run().unwrap(), GameStatus::Drawn);
    let text = output(session);
    assert!(text.contains("It's a draw!"));
    // board rendered after each of the 9 moves
    assert_eq!(text.matches("---+---+---").count(), 2 * 9 + 2);
}

#[test]
fn non_utf8_line_is_reprompted() {
    let mut script = b"5\n".to_vec();
    script.extend_from_slice(b"\xff\xfe\n");
    script.extend_from_slice(b"1\n9\n2\n3\n4\n7\n");
    let input = shared_input(Cursor::new(script));
    let x: Box<dyn Player> = Box::new(CliPlayer::new("alice", input.clone(), io::sink()));
    let o: Box<dyn Player> = Box::new(CliPlayer::new("bob", input, io::sink()));
    let mut session = GameSession::new(x, o, SmallRng::seed_from_u64(0), Vec::new());

    // X: 5, 9, 3, 7 ; O: (undecodable line), 1, 2, 4
    let status = session.run().unwrap();
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(session.engine().move_count(), 7);
    let text = output(session);
    assert!(text.contains("✗ Not a number"));
}

#[test]
fn closed_input_ends_session_with_error() {
    let mut session = humans("5\n");
    let err = session.run().unwrap_err();
    assert!(err.to_string().contains("bob"));
    assert_eq!(session.engine().status(), GameStatus::AwaitingMove(Mark::O));
}

#[test]
fn human_against_perfect_ai_cannot_win() {
    let input = shared_input(Cursor::new(b"1\n2\n3\n4\n5\n6\n7\n8\n9\n".to_vec()));
    let x: Box<dyn Player> = Box::new(CliPlayer::new("you", input, io::sink()));
    let o: Box<dyn Player> = Box::new(AiPlayer::new(Difficulty::Perfect));
    let mut session = GameSession::new(x, o, SmallRng::seed_from_u64(3), Vec::new());
    // Occupied picks are retried with the next scripted line.
    let status = session.run().unwrap();
    assert_ne!(status, GameStatus::Won(Mark::X));
}
