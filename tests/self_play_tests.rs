//! Integration tests for self-play generation and datasets.

use hex_graph::core::{GameRng, Player};
use hex_graph::rules::{winner, Board, Move};
use hex_graph::training::{
    collect_positions, make_dataset, Dataset, Record, SelfPlayConfig, SelfPlayGenerator,
};

/// Split a dataset's records back into games. Each game starts on an empty board.
fn games(dataset: &Dataset) -> Vec<&[Record]> {
    let records = dataset.records();
    let starts: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.board.empty_count() == dataset.board_size().pow(2))
        .map(|(i, _)| i)
        .collect();
    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(records.len());
            &records[start..end]
        })
        .collect()
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_make_dataset_is_reproducible() {
    let a = make_dataset(5, 10, 7).unwrap();
    let b = make_dataset(5, 10, 7).unwrap();

    assert_eq!(a.records(), b.records());
    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.games(), 10);
}

#[test]
fn test_generator_matches_make_dataset() {
    let config = SelfPlayConfig::new()
        .with_board_size(5)
        .with_games(10)
        .with_seed(7);
    let from_generator = SelfPlayGenerator::new(config).unwrap().generate().unwrap();
    assert_eq!(from_generator, make_dataset(5, 10, 7).unwrap());
}

#[test]
fn test_replay_from_first_principles() {
    // Coin flip for the opener, then one index draw per ply.
    let dataset = make_dataset(4, 3, 11).unwrap();
    let mut rng = GameRng::new(11);
    let mut expected = Vec::new();
    for _ in 0..3 {
        let to_move = if rng.gen_bool(0.5) { Player::X } else { Player::O };
        let mut board = Board::new(4);
        let mut player = to_move;
        let mut positions = Vec::new();
        loop {
            positions.push((board.clone(), player));
            if winner(&board).is_some() {
                break;
            }
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range_usize(0..moves.len())];
            board = board.apply_move(mv, player).unwrap();
            player = player.opposite();
        }
        let w = winner(&board);
        expected.extend(
            positions
                .into_iter()
                .map(|(b, p)| Record::new(b, p, u8::from(w == Some(p)))),
        );
    }
    assert_eq!(dataset.records(), expected.as_slice());
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn test_labels_answer_does_side_to_move_win() {
    let dataset = make_dataset(5, 20, 3).unwrap();
    let split = games(&dataset);
    assert_eq!(split.len(), 20);

    for game in split {
        let last = game.last().unwrap();
        let w = winner(&last.board).expect("random Hex games always finish");
        for record in game {
            assert_eq!(record.label, u8::from(record.to_move == w));
        }
        // Turns alternate, so labels alternate too.
        for pair in game.windows(2) {
            assert_ne!(pair[0].label, pair[1].label);
        }
    }
}

#[test]
fn test_collect_positions_on_decided_board() {
    let board = Board::new(3)
        .apply_move(Move::new(0, 0), Player::X)
        .unwrap()
        .apply_move(Move::new(1, 0), Player::X)
        .unwrap()
        .apply_move(Move::new(2, 0), Player::X)
        .unwrap();
    let mut rng = GameRng::new(1);

    let records = collect_positions(&board, Player::X, &mut rng).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].board, board);
    assert_eq!(records[0].label, 1);
}

#[test]
fn test_collect_positions_on_full_board() {
    let board = Board::from_code_rows(&[[2u8, 2], [1, 1]]).unwrap();
    let w = winner(&board).unwrap();
    let records = collect_positions(&board, Player::O, &mut GameRng::new(0)).unwrap();
    assert_eq!(records, vec![Record::new(board, Player::O, u8::from(w == Player::O))]);
}

#[test]
fn test_collect_positions_does_not_touch_input() {
    let board = Board::new(4).apply_move(Move::new(2, 1), Player::O).unwrap();
    let before = board.clone();
    let records = collect_positions(&board, Player::X, &mut GameRng::new(8)).unwrap();

    assert_eq!(board, before);
    assert_eq!(records[0].board, board);
    assert!(records.len() > 1);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_dataset_file_round_trip() {
    let dataset = make_dataset(4, 5, 21).unwrap();
    let path = std::env::temp_dir().join(format!("hex_graph_selfplay_{}.bin", std::process::id()));

    dataset.save(&path).unwrap();
    let loaded = Dataset::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, dataset);
    assert_eq!(loaded.stats(), dataset.stats());
}
