//! Hex rules: board, moves, adjacency, win detection, random playouts.
//!
//! Everything here is a pure function of a board snapshot. Applying a move
//! returns a new board; nothing is mutated behind the caller's back.

pub mod board;
pub mod connectivity;
pub mod playout;

pub use board::{Board, Move};
pub use connectivity::{connected, connections, neighbors, winner, Connections, Direction};
pub use playout::random_playout;
