//! Uniform random playouts.

use super::board::Board;
use super::connectivity::winner;
use crate::core::{GameRng, Player, Result};

/// Play uniformly random legal moves until someone connects or the board
/// fills up.
///
/// Returns `Ok(None)` only when the board fills without a connection, which
/// cannot happen on a real Hex board but is a defined outcome for callers.
/// The input board is left untouched.
pub fn random_playout(board: &Board, to_move: Player, rng: &mut GameRng) -> Result<Option<Player>> {
    let mut board = board.clone();
    let mut player = to_move;
    loop {
        if let Some(w) = winner(&board) {
            return Ok(Some(w));
        }
        let moves = board.legal_moves();
        let Some(&mv) = rng.choose(&moves) else {
            return Ok(None);
        };
        board = board.apply_move(mv, player)?;
        player = player.opposite();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Move;

    #[test]
    fn test_playout_always_finishes_with_winner() {
        let mut rng = GameRng::new(11);
        for size in 1..=6 {
            let board = Board::new(size);
            let result = random_playout(&board, Player::X, &mut rng).unwrap();
            assert!(result.is_some(), "size {size} playout ended without a winner");
        }
    }

    #[test]
    fn test_playout_does_not_touch_input() {
        let mut rng = GameRng::new(5);
        let board = Board::new(4).apply_move(Move::new(0, 0), Player::X).unwrap();
        let before = board.clone();
        random_playout(&board, Player::O, &mut rng).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_playout_on_won_board_consumes_nothing() {
        let board = Board::from_code_rows(&[[1u8, 0], [1, 0]]).unwrap();
        let mut rng = GameRng::new(8);
        let mut untouched = GameRng::new(8);

        assert_eq!(random_playout(&board, Player::O, &mut rng).unwrap(), Some(Player::X));
        assert_eq!(rng.gen_range_usize(0..1000), untouched.gen_range_usize(0..1000));
    }

    #[test]
    fn test_playout_is_reproducible() {
        let board = Board::new(7);
        let a = random_playout(&board, Player::X, &mut GameRng::new(99)).unwrap();
        let b = random_playout(&board, Player::X, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
