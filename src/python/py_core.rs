//! Conversions between numpy boards and crate types.
//!
//! Boards cross the boundary as n×n `int8` arrays with 0 = empty, 1 = X,
//! 2 = O. Players are the same codes, 1 or 2.

use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray2};
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Cell, HexError, Player};
use crate::rules::Board;

impl From<HexError> for PyErr {
    fn from(err: HexError) -> PyErr {
        match err {
            HexError::Io { .. } => PyIOError::new_err(err.to_string()),
            HexError::NotFitted | HexError::Encoding(_) | HexError::Json(_) => {
                PyRuntimeError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Parse a player code.
pub(crate) fn player_from_code(code: u8) -> PyResult<Player> {
    Player::from_code(code)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 (X) or 2 (O), got {code}")))
}

/// Code for an optional winner, 0 meaning nobody.
pub(crate) fn winner_code(winner: Option<Player>) -> u8 {
    winner.map_or(0, Player::code)
}

/// Read a square `int8` array into a board.
pub(crate) fn board_from_array(array: &PyReadonlyArray2<'_, i8>) -> PyResult<Board> {
    let view = array.as_array();
    let (rows, cols) = view.dim();
    if rows != cols {
        return Err(PyValueError::new_err(format!(
            "board must be square, got {rows}x{cols}"
        )));
    }

    let mut grid = Vec::with_capacity(rows);
    for (r, row) in view.outer_iter().enumerate() {
        let mut cells = Vec::with_capacity(cols);
        for (c, &code) in row.iter().enumerate() {
            let cell = u8::try_from(code)
                .ok()
                .and_then(Cell::from_code)
                .ok_or(HexError::InvalidCellCode {
                    code: i64::from(code),
                    position: r * cols + c,
                })?;
            cells.push(cell);
        }
        grid.push(cells);
    }
    Ok(Board::from_rows(&grid)?)
}

/// Flat cell codes in row-major order.
pub(crate) fn board_codes(board: &Board) -> impl Iterator<Item = i8> + '_ {
    board.cells().iter().map(|cell| cell.code() as i8)
}

/// Write a board out as an n×n `int8` array.
pub(crate) fn board_to_array<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<i8>>> {
    let n = board.size();
    let flat: Vec<i8> = board_codes(board).collect();
    PyArray1::from_vec_bound(py, flat).reshape([n, n])
}
