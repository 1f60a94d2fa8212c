//! Six-direction adjacency and win detection.
//!
//! Cells sit on a rhombus in axial layout. Each cell touches up to six
//! neighbours; the offsets below are shared by the connectivity search and
//! by the graph encoder, so the learner sees exactly the adjacency the rules
//! use.
//!
//! A player wins when a chain of their stones joins their two edges:
//! X joins row 0 to row n-1, O joins column 0 to column n-1. Each check is a
//! breadth-first search seeded from every owned cell on the starting edge.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::board::{Board, Move};
use crate::core::{Cell, Player};

/// Neighbour direction on the Hex rhombus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    NE,
    E,
    SE,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 6] = [
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// (row, col) offset of the neighbour in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::NE => (-1, 0),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::SW => (1, 0),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// Position in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }

    /// Step from (row, col) in this direction, staying inside `size`.
    #[must_use]
    pub fn step(self, size: usize, row: usize, col: usize) -> Option<Move> {
        let (dr, dc) = self.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Move::new(row, col))
    }
}

/// On-board neighbours of (row, col) in direction order.
pub fn neighbors(size: usize, row: usize, col: usize) -> impl Iterator<Item = (Direction, Move)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| dir.step(size, row, col).map(|mv| (dir, mv)))
}

/// Does `player` have a chain joining their two edges?
#[must_use]
pub fn connected(board: &Board, player: Player) -> bool {
    let n = board.size();
    if n == 0 {
        return false;
    }
    let stone = Cell::from(player);

    let sources = (0..n).map(|k| match player {
        Player::X => Move::new(0, k),
        Player::O => Move::new(k, 0),
    });
    let reached_goal = |mv: Move| match player {
        Player::X => mv.row == n - 1,
        Player::O => mv.col == n - 1,
    };

    let mut seen = vec![false; n * n];
    let mut queue = VecDeque::new();
    for mv in sources {
        if board[mv] == stone {
            seen[mv.row * n + mv.col] = true;
            queue.push_back(mv);
        }
    }

    while let Some(mv) = queue.pop_front() {
        if reached_goal(mv) {
            return true;
        }
        for (_, next) in neighbors(n, mv.row, mv.col) {
            let i = next.row * n + next.col;
            if !seen[i] && board[next] == stone {
                seen[i] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

/// Result of running both connectivity searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    pub x: bool,
    pub o: bool,
}

impl Connections {
    /// Whether `player` is connected.
    #[must_use]
    pub fn has(&self, player: Player) -> bool {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// The connected player, X first.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.x {
            Some(Player::X)
        } else if self.o {
            Some(Player::O)
        } else {
            None
        }
    }
}

/// Run both searches independently.
#[must_use]
pub fn connections(board: &Board) -> Connections {
    Connections {
        x: connected(board, Player::X),
        o: connected(board, Player::O),
    }
}

/// The player whose chain joins their edges, if any.
///
/// A top-bottom chain separates the left edge from the right edge, so at
/// most one player can be connected on any board.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    let found = connections(board);
    debug_assert!(!(found.x && found.o), "both players connected:\n{board}");
    found.winner()
}

impl Board {
    /// See [`winner`].
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        let codes: Vec<Vec<u8>> = rows
            .iter()
            .map(|r| {
                r.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        'X' => 1,
                        'O' => 2,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Board::from_code_rows(&codes).unwrap()
    }

    #[test]
    fn test_offsets_match_order() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(
            offsets,
            vec![(-1, 0), (0, 1), (1, 1), (1, 0), (0, -1), (-1, -1)]
        );
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_reverse_offsets_cancel() {
        for dir in Direction::ALL {
            let (a, b) = dir.offset();
            let (c, d) = dir.reverse().offset();
            assert_eq!((a + c, b + d), (0, 0));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn test_neighbors_interior_and_corners() {
        assert_eq!(neighbors(3, 1, 1).count(), 6);

        let top_left: Vec<_> = neighbors(3, 0, 0).collect();
        assert_eq!(
            top_left,
            vec![
                (Direction::E, Move::new(0, 1)),
                (Direction::SE, Move::new(1, 1)),
                (Direction::SW, Move::new(1, 0)),
            ]
        );

        let top_right: Vec<_> = neighbors(3, 0, 2).map(|(d, _)| d).collect();
        assert_eq!(top_right, vec![Direction::SW, Direction::W]);

        assert_eq!(neighbors(1, 0, 0).count(), 0);
    }

    #[test]
    fn test_left_column_wins_for_x() {
        let b = board(&["X..", "X..", "X.."]);
        assert!(connected(&b, Player::X));
        assert!(!connected(&b, Player::O));
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn test_row_wins_for_o() {
        let b = board(&["...", "OOO", "..."]);
        assert_eq!(winner(&b), Some(Player::O));
        assert_eq!(connections(&b), Connections { x: false, o: true });
    }

    #[test]
    fn test_diagonal_chain_uses_se_links() {
        // (0,0) -> (1,1) -> (2,2) are SE neighbours.
        let b = board(&["X..", ".X.", "..X"]);
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn test_anti_diagonal_is_not_adjacent() {
        // (1,1) -> (2,0) would be offset (1,-1), which is not a Hex link.
        let b = board(&["..X", ".X.", "X.."]);
        assert_eq!(winner(&b), None);

        let broken = board(&["X..", "...", ".X."]);
        assert_eq!(winner(&broken), None);
    }

    #[test]
    fn test_blocked_path() {
        let b = board(&["X...", "X...", "OOOO", "X..."]);
        assert_eq!(winner(&b), Some(Player::O));
        assert!(!connected(&b, Player::X));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new(5)), None);
        assert_eq!(winner(&Board::new(0)), None);
    }

    #[test]
    fn test_single_cell_board() {
        let x = Board::new(1).apply_move(Move::new(0, 0), Player::X).unwrap();
        let o = Board::new(1).apply_move(Move::new(0, 0), Player::O).unwrap();
        assert_eq!(winner(&x), Some(Player::X));
        assert_eq!(winner(&o), Some(Player::O));
        assert_eq!(x.winner(), Some(Player::X));
    }

    #[test]
    fn test_winding_path() {
        let b = board(&[
            "X....",
            "XXXX.",
            "...X.",
            ".XXX.",
            ".X...",
        ]);
        assert_eq!(winner(&b), Some(Player::X));
    }

    #[test]
    fn test_full_board_has_exactly_one_winner() {
        let b = board(&["XOX", "OXO", "OXX"]);
        let found = connections(&b);
        assert!(found.x ^ found.o);
    }
}
