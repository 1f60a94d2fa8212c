//! Self-play loop for generating training data.
//!
//! Games are played with uniformly random moves. Every visited position is
//! recorded, including the initial and final ones, and labelled once the
//! game is over: 1 for positions where the eventual winner was to move,
//! 0 otherwise.
//!
//! Randomness comes from one [`GameRng`] per run, consumed in a fixed order:
//! one coin flip per game for the starting player, then one index draw per
//! ply. The same seed therefore replays the same dataset.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, HexError, Player, Result};
use crate::rules::{winner, Board};

use super::dataset::{Dataset, Record};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Side length of the board.
    pub board_size: usize,

    /// Number of games to simulate.
    pub games: usize,

    /// Seed for the run's random stream.
    pub seed: u64,

    /// Keep games that end with no winner. Their positions are all labelled 0.
    pub keep_undecided: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            games: 2000,
            seed: 1,
            keep_undecided: false,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Keep or drop games without a winner.
    pub fn with_keep_undecided(mut self, keep: bool) -> Self {
        self.keep_undecided = keep;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(HexError::InvalidConfig {
                message: "board_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Positions of one finished game and how it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedGame {
    /// Every visited (board, side to move), in order.
    pub positions: Vec<(Board, Player)>,
    /// `None` if the board filled up without a connection.
    pub winner: Option<Player>,
}

impl PlayedGame {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Label every position against the final result.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        let winner = self.winner;
        self.positions
            .into_iter()
            .map(|(board, to_move)| {
                let label = u8::from(winner == Some(to_move));
                Record::new(board, to_move, label)
            })
            .collect()
    }
}

/// Play one random game from `initial` and return every visited position.
pub fn play_game(initial: &Board, to_move: Player, rng: &mut GameRng) -> Result<PlayedGame> {
    let mut positions = Vec::with_capacity(initial.empty_count() + 1);
    let mut board = initial.clone();
    let mut player = to_move;

    loop {
        positions.push((board.clone(), player));
        if winner(&board).is_some() {
            break;
        }
        let moves = board.legal_moves();
        let Some(&mv) = rng.choose(&moves) else {
            break;
        };
        board = board.apply_move(mv, player)?;
        player = player.opposite();
    }

    Ok(PlayedGame {
        winner: winner(&board),
        positions,
    })
}

/// Simulate one random game and label each position by whether its side to
/// move went on to win.
pub fn collect_positions(initial: &Board, to_move: Player, rng: &mut GameRng) -> Result<Vec<Record>> {
    Ok(play_game(initial, to_move, rng)?.into_records())
}

/// Generate `games` random games on an empty n×n board from `seed`.
///
/// ```
/// let a = hex_graph::training::make_dataset(3, 4, 9).unwrap();
/// let b = hex_graph::training::make_dataset(3, 4, 9).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn make_dataset(n: usize, games: usize, seed: u64) -> Result<Dataset> {
    let config = SelfPlayConfig::new()
        .with_board_size(n)
        .with_games(games)
        .with_seed(seed);
    SelfPlayGenerator::new(config)?.generate()
}

/// Runs a configured batch of self-play games.
#[derive(Clone, Debug)]
pub struct SelfPlayGenerator {
    config: SelfPlayConfig,
}

impl SelfPlayGenerator {
    /// Create a generator, rejecting invalid configs.
    pub fn new(config: SelfPlayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play all games from a fresh generator seeded with the config seed.
    pub fn generate(&self) -> Result<Dataset> {
        let mut rng = GameRng::new(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Play all games, drawing from `rng`.
    ///
    /// A game that fails is logged and skipped; records from earlier games
    /// are kept.
    pub fn generate_with(&self, rng: &mut GameRng) -> Result<Dataset> {
        let n = self.config.board_size;
        let empty = Board::new(n);
        let mut dataset = Dataset::new(n, rng.seed());
        let mut undecided = 0;
        let mut failed = 0;

        for index in 0..self.config.games {
            let to_move = if rng.gen_bool(0.5) { Player::X } else { Player::O };
            let game = match play_game(&empty, to_move, rng) {
                Ok(game) => game,
                Err(e) => {
                    log::warn!("game {index} failed and was discarded: {e}");
                    failed += 1;
                    continue;
                }
            };

            log::debug!(
                "game {index}: {to_move} opened, {} plies, winner {:?}",
                game.plies(),
                game.winner
            );
            if game.winner.is_none() {
                undecided += 1;
                if !self.config.keep_undecided {
                    log::debug!("game {index} ended without a winner, dropped");
                    continue;
                }
            }
            dataset.push_game(game.into_records())?;
        }

        log::info!(
            "self-play on {n}x{n}: {} games, {} records, {undecided} undecided, {failed} failed",
            dataset.games(),
            dataset.len()
        );
        Ok(dataset)
    }
}
