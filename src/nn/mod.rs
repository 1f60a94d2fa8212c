//! Graph representation of Hex positions for an external graph learner.
//!
//! ## Overview
//!
//! - **Topology**: `GraphTopology`, an arena of cell and goal nodes with
//!   direction-labelled edges, built once per board size
//! - **Encoding**: `GraphEncoder` and `GraphBatch`, per-sample node symbols
//! - **Learner contract**: `GraphClassifier`, with `MajorityClassifier` as a
//!   baseline
//! - **Play**: `best_move`, one-ply lookahead over a fitted classifier
//!
//! ## Usage
//!
//! ```rust
//! use hex_graph::core::Player;
//! use hex_graph::nn::{GraphEncoder, Symbol};
//! use hex_graph::rules::{Board, Move};
//!
//! let encoder = GraphEncoder::new(3);
//! let board = Board::new(3).apply_move(Move::new(1, 1), Player::X).unwrap();
//! let batch = encoder.encode_one(&board, Player::O).unwrap();
//!
//! let center = encoder.topology().cell_node(Move::new(1, 1));
//! assert!(batch.node_symbols(0, center).unwrap().contains(Symbol::X));
//! ```

pub mod encoder;
pub mod graph;
pub mod lookahead;
pub mod traits;

pub use encoder::{build_topology, cell_symbols, GraphBatch, GraphEncoder};
pub use graph::{
    Edge, EdgeKind, Goal, GraphTopology, Node, NodeId, NodeKind, Signature, Symbol, SymbolSet,
};
pub use lookahead::best_move;
pub use traits::{check_fit_inputs, GraphClassifier, MajorityClassifier};
