//! Error types for hex-graph.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HexError {
    #[error("invalid move ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("board size mismatch: topology expects {expected}x{expected}, got {got}x{got}")]
    InvalidBoardSize { expected: usize, got: usize },

    #[error("{size}x{size} board cannot hold {cells} cells")]
    InvalidCellCount { size: usize, cells: usize },

    #[error("sample index {index} out of range for batch of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node {node} out of range for graph of {len} nodes")]
    NodeOutOfRange { node: usize, len: usize },

    #[error("sample {index} has no node properties")]
    IncompleteBatch { index: usize },

    #[error("got {labels} labels for {samples} samples")]
    LabelCountMismatch { labels: usize, samples: usize },

    #[error("classifier returned {predictions} predictions for {candidates} candidate moves")]
    PredictionCountMismatch { predictions: usize, candidates: usize },

    #[error("batch signature does not match the one the classifier was fitted on")]
    SignatureMismatch,

    #[error("classifier has not been fitted")]
    NotFitted,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid cell code {code} at position {position}")]
    InvalidCellCode { code: i64, position: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl HexError {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        HexError::Io {
            operation: operation.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HexError>;
