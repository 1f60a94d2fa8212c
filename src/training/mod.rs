//! Training data generation.
//!
//! ## Overview
//!
//! - **Self-play**: `SelfPlayGenerator` plays random games and labels every
//!   visited position by whether its side to move went on to win
//! - **Dataset**: `Dataset` holds the labelled records, encodes them into a
//!   `GraphBatch`, and persists them with bincode
//!
//! ## Usage
//!
//! ```rust
//! use hex_graph::nn::GraphEncoder;
//! use hex_graph::training::{SelfPlayConfig, SelfPlayGenerator};
//!
//! let config = SelfPlayConfig::new().with_board_size(4).with_games(3).with_seed(42);
//! let dataset = SelfPlayGenerator::new(config).unwrap().generate().unwrap();
//!
//! let batch = dataset.to_batch(&GraphEncoder::new(4)).unwrap();
//! assert_eq!(batch.len(), dataset.labels().len());
//! ```

pub mod dataset;
pub mod self_play;

pub use dataset::{Dataset, DatasetStats, Record};
pub use self_play::{
    collect_positions, make_dataset, play_game, PlayedGame, SelfPlayConfig, SelfPlayGenerator,
};
