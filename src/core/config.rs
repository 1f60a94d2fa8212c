//! Model hyperparameter record.
//!
//! The graph learner is an external collaborator; this crate only carries
//! its hyperparameters so they can be stored next to a trained model and a
//! generated dataset. The record is flat and persisted as JSON.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{HexError, Result};

/// Hyperparameters of the graph classifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Side length of the Hex board.
    pub board_size: usize,

    /// Width of the symbol hypervectors.
    pub hypervector_size: usize,

    /// Bits set per symbol hypervector.
    pub hypervector_bits: usize,

    /// Number of clauses.
    pub clauses: usize,

    /// Voting threshold (T).
    pub threshold: u32,

    /// Specificity (s).
    pub specificity: f64,

    /// Message-passing rounds.
    pub depth: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            hypervector_size: 1024,
            hypervector_bits: 4,
            clauses: 200,
            threshold: 50,
            specificity: 5.0,
            depth: 2,
        }
    }
}

impl ModelConfig {
    /// Create a config for the given board size with default hyperparameters.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hypervector(mut self, size: usize, bits: usize) -> Self {
        self.hypervector_size = size;
        self.hypervector_bits = bits;
        self
    }

    #[must_use]
    pub fn with_clauses(mut self, clauses: usize) -> Self {
        self.clauses = clauses;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_specificity(mut self, specificity: f64) -> Self {
        self.specificity = specificity;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Check that the record describes a usable model.
    pub fn validate(&self) -> Result<()> {
        let fail = |message: &str| {
            Err(HexError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.board_size == 0 {
            return fail("board_size must be at least 1");
        }
        if self.hypervector_size == 0 {
            return fail("hypervector_size must be at least 1");
        }
        if self.hypervector_bits > self.hypervector_size {
            return fail("hypervector_bits cannot exceed hypervector_size");
        }
        if self.clauses == 0 {
            return fail("clauses must be at least 1");
        }
        if !(self.specificity.is_finite() && self.specificity >= 1.0) {
            return fail("specificity must be a finite value >= 1.0");
        }
        Ok(())
    }

    /// Write the record as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| HexError::io(format!("create {}", path.display()), e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Read and validate a record written by [`ModelConfig::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| HexError::io(format!("open {}", path.display()), e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}
