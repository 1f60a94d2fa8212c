//! Integration tests for board rules and win detection.

use hex_graph::core::{Cell, GameRng, HexError, Player};
use hex_graph::rules::{connected, connections, random_playout, winner, Board, Move};
use proptest::prelude::*;

/// An arbitrary n×n board with n in 1..=7 and any mix of stones.
fn arb_board() -> impl Strategy<Value = Board> {
    (1usize..=7)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0u8..3, n * n)))
        .prop_map(|(n, codes)| {
            let rows: Vec<&[u8]> = codes.chunks(n).collect();
            Board::from_code_rows(&rows).unwrap()
        })
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_left_column_wins_for_x() {
    let board = Board::new(3)
        .apply_move(Move::new(0, 0), Player::X)
        .unwrap()
        .apply_move(Move::new(1, 0), Player::X)
        .unwrap()
        .apply_move(Move::new(2, 0), Player::X)
        .unwrap();

    assert_eq!(winner(&board), Some(Player::X));
    assert!(connected(&board, Player::X));
    assert!(!connected(&board, Player::O));
    assert!(!connections(&board).has(Player::O));
}

#[test]
fn test_single_cell_board() {
    let empty = Board::new(1);
    assert_eq!(winner(&empty), None);
    assert_eq!(empty.legal_moves(), vec![Move::new(0, 0)]);

    for player in Player::ALL {
        let board = empty.apply_move(Move::new(0, 0), player).unwrap();
        assert_eq!(winner(&board), Some(player));
        assert!(board.legal_moves().is_empty());
    }
}

#[test]
fn test_o_connects_left_to_right() {
    let board = Board::from_code_rows(&[[0u8, 0, 0, 0], [2, 2, 0, 0], [0, 0, 2, 2], [0, 0, 0, 0]])
        .unwrap();
    // (1,1) -> (2,2) is SE.
    assert_eq!(winner(&board), Some(Player::O));
}

#[test]
fn test_occupied_move_is_rejected() {
    let board = Board::new(3).apply_move(Move::new(1, 1), Player::X).unwrap();
    let err = board.apply_move(Move::new(1, 1), Player::O).unwrap_err();
    assert!(matches!(err, HexError::InvalidMove { row: 1, col: 1, .. }));

    let err = board.apply_move(Move::new(3, 0), Player::O).unwrap_err();
    assert!(matches!(err, HexError::InvalidMove { row: 3, col: 0, .. }));
}

#[test]
fn test_opposite_is_an_involution() {
    for player in Player::ALL {
        assert_ne!(player.opposite(), player);
        assert_eq!(player.opposite().opposite(), player);
    }
}

#[test]
fn test_playout_always_decides_on_empty_board() {
    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let result = random_playout(&Board::new(5), Player::X, &mut rng).unwrap();
        assert!(result.is_some());
    }
}

#[test]
fn test_playout_is_seeded() {
    let board = Board::new(6);
    let a = random_playout(&board, Player::O, &mut GameRng::new(99)).unwrap();
    let b = random_playout(&board, Player::O, &mut GameRng::new(99)).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_legal_moves_are_exactly_the_empty_cells(board in arb_board()) {
        let n = board.size();
        let expected: Vec<Move> = (0..n)
            .flat_map(|row| (0..n).map(move |col| Move::new(row, col)))
            .filter(|&mv| board[mv] == Cell::Empty)
            .collect();
        prop_assert_eq!(board.legal_moves(), expected);
    }

    #[test]
    fn prop_apply_move_leaves_input_untouched(board in arb_board(), pick in any::<prop::sample::Index>()) {
        let moves = board.legal_moves();
        prop_assume!(!moves.is_empty());
        let mv = moves[pick.index(moves.len())];

        let before = board.clone();
        let after = board.apply_move(mv, Player::O).unwrap();

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(after[mv], Cell::O);
        for (other, cell) in board.iter() {
            if other != mv {
                prop_assert_eq!(after[other], cell);
            }
        }
    }

    #[test]
    fn prop_winner_is_monotonic(board in arb_board()) {
        if let Some(w) = winner(&board) {
            for mv in board.legal_moves() {
                for player in Player::ALL {
                    let next = board.apply_move(mv, player).unwrap();
                    prop_assert_eq!(winner(&next), Some(w));
                }
            }
        }
    }

    #[test]
    fn prop_at_most_one_player_connected(board in arb_board()) {
        let c = connections(&board);
        prop_assert!(!(c.x && c.o));
        prop_assert_eq!(winner(&board), c.winner());
    }

    #[test]
    fn prop_full_board_has_a_winner(n in 1usize..=7, seed in any::<u64>()) {
        // Fill the board with random stones, ignoring turn order.
        let mut rng = GameRng::new(seed);
        let mut board = Board::new(n);
        for mv in Board::new(n).legal_moves() {
            let player = if rng.gen_bool(0.5) { Player::X } else { Player::O };
            board = board.apply_move(mv, player).unwrap();
        }
        prop_assert!(winner(&board).is_some());
    }
}
