//! Rule bindings for Python.

use numpy::{PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;

use crate::core::GameRng;
use crate::rules::{self, Move};

use super::py_core::{board_from_array, board_to_array, player_from_code, winner_code};

/// Winner of a board: 1 (X), 2 (O) or 0 if nobody is connected yet.
#[pyfunction]
pub fn winner(board: PyReadonlyArray2<'_, i8>) -> PyResult<u8> {
    let board = board_from_array(&board)?;
    Ok(winner_code(rules::winner(&board)))
}

/// Empty cells as (row, col) pairs, in row-major order.
#[pyfunction]
pub fn legal_moves(board: PyReadonlyArray2<'_, i8>) -> PyResult<Vec<(usize, usize)>> {
    let board = board_from_array(&board)?;
    Ok(board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv.row, mv.col))
        .collect())
}

/// Return a copy of `board` with `player`'s stone at (row, col).
#[pyfunction]
pub fn apply_move<'py>(
    py: Python<'py>,
    board: PyReadonlyArray2<'_, i8>,
    row: usize,
    col: usize,
    player: u8,
) -> PyResult<Bound<'py, PyArray2<i8>>> {
    let board = board_from_array(&board)?;
    let next = board.apply_move(Move::new(row, col), player_from_code(player)?)?;
    board_to_array(py, &next)
}

/// The other player's code.
#[pyfunction]
pub fn opposite(player: u8) -> PyResult<u8> {
    Ok(player_from_code(player)?.opposite().code())
}

/// Play uniformly random moves to the end and return the winner code.
#[pyfunction]
pub fn random_playout(board: PyReadonlyArray2<'_, i8>, to_move: u8, seed: u64) -> PyResult<u8> {
    let board = board_from_array(&board)?;
    let mut rng = GameRng::new(seed);
    let result = rules::random_playout(&board, player_from_code(to_move)?, &mut rng)?;
    Ok(winner_code(result))
}
