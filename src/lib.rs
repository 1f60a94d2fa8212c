//! # hex-graph
//!
//! Hex rules, graph encoding and self-play data generation for training a
//! graph-based position classifier.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Board operations never mutate their input. Applying a
//!    move returns a new board.
//!
//! 2. **Explicit Randomness**: A seeded `GameRng` is passed to everything
//!    that draws random numbers, so a seed fully determines a dataset.
//!
//! 3. **Typed Graphs**: Nodes, edges and symbols are enums addressed by
//!    dense indices. Batch compatibility is a structural `Signature`.
//!
//! ## Modules
//!
//! - `core`: Players, cells, RNG, model configuration, errors
//! - `rules`: Board, moves, six-direction adjacency, win detection, playouts
//! - `nn`: Graph topology, batch encoding, classifier contract, lookahead
//! - `training`: Self-play generation and labelled datasets
//!
//! ## Example
//!
//! ```rust
//! use hex_graph::{make_dataset, GraphEncoder};
//!
//! let dataset = make_dataset(5, 10, 7).unwrap();
//! let batch = dataset.to_batch(&GraphEncoder::new(5)).unwrap();
//! assert_eq!(batch.len(), dataset.len());
//! ```

pub mod core;
pub mod rules;
pub mod nn;
pub mod training;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, GameRngState, HexError, ModelConfig, Player, Result};

pub use crate::rules::{random_playout, winner, Board, Direction, Move};

pub use crate::nn::{
    best_move, build_topology, GraphBatch, GraphClassifier, GraphEncoder, GraphTopology,
    MajorityClassifier, NodeId, Signature, Symbol, SymbolSet,
};

pub use crate::training::{
    collect_positions, make_dataset, Dataset, Record, SelfPlayConfig, SelfPlayGenerator,
};
