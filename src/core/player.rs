//! Player identities and cell states.
//!
//! ## Player
//!
//! Hex has exactly two sides. `X` connects the top edge to the bottom edge,
//! `O` connects the left edge to the right edge. Turns alternate strictly.
//!
//! ## Cell
//!
//! Each board cell is empty or holds one player's stone. Stones are never
//! removed, so a cell never goes back to `Empty`.
//!
//! Both types carry an integer code (0 = empty, 1 = X, 2 = O) so boards can
//! be exchanged with numeric matrices.

use serde::{Deserialize, Serialize};

/// One of the two Hex players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Connects row 0 to row n-1.
    X,
    /// Connects column 0 to column n-1.
    O,
}

impl Player {
    /// Both players, X first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The other player.
    ///
    /// ```
    /// use hex_graph::core::Player;
    ///
    /// assert_eq!(Player::X.opposite(), Player::O);
    /// assert_eq!(Player::O.opposite(), Player::X);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Integer code of this player's stones (1 for X, 2 for O).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    /// Parse a player from its integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => None,
        }
    }

    /// Index into two-element per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Integer code (0 empty, 1 X, 2 O).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    /// Parse a cell from its integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}
