//! One-ply move selection on top of a fitted classifier.

use crate::core::{HexError, Player, Result};
use crate::rules::{Board, Move};

use super::encoder::GraphEncoder;
use super::traits::GraphClassifier;

/// Pick the move that leaves the opponent with the lowest predicted chance
/// of winning.
///
/// Every child position is encoded with the opponent to move, and all of
/// them go to the classifier in a single batch. Ties keep the earliest move
/// in row-major order. Returns `Ok(None)` when the board has no legal moves.
pub fn best_move<C: GraphClassifier + ?Sized>(
    classifier: &C,
    encoder: &GraphEncoder,
    board: &Board,
    to_move: Player,
) -> Result<Option<Move>> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(None);
    }

    let children = moves
        .iter()
        .map(|&mv| board.apply_move(mv, to_move))
        .collect::<Result<Vec<_>>>()?;
    let opponent = to_move.opposite();
    let batch = encoder.encode_batch(children.iter().map(|b| (b, opponent)))?;
    let opponent_win = classifier.predict_proba(&batch)?;
    if opponent_win.len() != moves.len() {
        return Err(HexError::PredictionCountMismatch {
            predictions: opponent_win.len(),
            candidates: moves.len(),
        });
    }

    let mut best = 0;
    for (i, &p) in opponent_win.iter().enumerate().skip(1) {
        if p < opponent_win[best] {
            best = i;
        }
    }
    log::debug!(
        "best move for {to_move}: {} (opponent win {:.3}) among {} candidates",
        moves[best],
        opponent_win[best],
        moves.len()
    );
    Ok(Some(moves[best]))
}
