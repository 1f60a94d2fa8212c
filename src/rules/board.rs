//! Hex board and move application.
//!
//! The board is an n×n rhombus stored row-major. Moves never mutate a board
//! in place: [`Board::apply_move`] returns a fresh copy, so positions recorded
//! during self-play stay valid while the game continues.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, HexError, Player, Result};

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An n×n Hex board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Serialized form of [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = HexError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let expected = raw.size.checked_mul(raw.size);
        if expected != Some(raw.cells.len()) {
            return Err(HexError::InvalidCellCount {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from rows of cells. All rows must have `rows.len()` cells.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(HexError::InvalidBoardSize {
                    expected: size,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Build a board from rows of integer codes (0 empty, 1 X, 2 O).
    pub fn from_code_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(HexError::InvalidBoardSize {
                    expected: size,
                    got: row.len(),
                });
            }
            for &code in row {
                let cell = Cell::from_code(code).ok_or(HexError::InvalidCellCode {
                    code: i64::from(code),
                    position: cells.len(),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self { size, cells })
    }

    /// Rows of integer codes, the inverse of [`Board::from_code_rows`].
    #[must_use]
    pub fn to_code_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Cell at (row, col), or `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every coordinate with its cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Move::new(i / size, i % size), cell))
    }

    /// All empty cells in row-major order.
    ///
    /// The order is part of the reproducibility contract: a seeded index into
    /// this list must select the same move every time.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Whether `mv` is on the board and empty.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.get(mv.row, mv.col).is_some_and(Cell::is_empty)
    }

    /// Return a copy of this board with `player`'s stone placed at `mv`.
    pub fn apply_move(&self, mv: Move, player: Player) -> Result<Board> {
        let index = self.index_of(mv.row, mv.col).ok_or(HexError::InvalidMove {
            row: mv.row,
            col: mv.col,
            reason: "outside the board",
        })?;
        if !self.cells[index].is_empty() {
            return Err(HexError::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: "cell is occupied",
            });
        }
        let mut next = self.clone();
        next.cells[index] = Cell::from(player);
        Ok(next)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of stones `player` has on the board.
    #[must_use]
    pub fn stone_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.owner() == Some(player))
            .count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

impl Index<Move> for Board {
    type Output = Cell;

    fn index(&self, mv: Move) -> &Self::Output {
        &self.cells[mv.row * self.size + mv.col]
    }
}

/// Slanted rhombus layout: each row is shifted one space further right.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{}", " ".repeat(row))?;
            for col in 0..self.size {
                let ch = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
