//! Labelled positions collected from self-play.
//!
//! A [`Record`] is one visited position with the side to move and a binary
//! label: 1 iff that side went on to win the game. A [`Dataset`] is the
//! ordered concatenation of records from many games, plus the board size
//! and seed that produced it.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{HexError, Player, Result};
use crate::nn::{GraphBatch, GraphEncoder};
use crate::rules::Board;

/// One labelled position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Snapshot of the board at this step.
    pub board: Board,
    /// Player about to move.
    pub to_move: Player,
    /// 1 if `to_move` won the game this position came from.
    pub label: u8,
}

impl Record {
    pub fn new(board: Board, to_move: Player, label: u8) -> Self {
        Self {
            board,
            to_move,
            label,
        }
    }

    /// Did the side to move win?
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.label == 1
    }
}

/// Summary counts over a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub records: usize,
    pub games: usize,
    pub positives: usize,
    pub negatives: usize,
    pub unique_positions: usize,
}

impl DatasetStats {
    /// Fraction of records labelled 1.
    #[must_use]
    pub fn positive_rate(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.positives as f64 / self.records as f64
        }
    }
}

/// Ordered collection of records for one board size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    board_size: usize,
    seed: u64,
    games: usize,
    records: Vec<Record>,
}

impl Dataset {
    /// Empty dataset for n×n boards.
    pub fn new(board_size: usize, seed: u64) -> Self {
        Self {
            board_size,
            seed,
            games: 0,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Seed of the run that generated this dataset.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of games whose records were kept.
    #[must_use]
    pub fn games(&self) -> usize {
        self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Every record must be on an n×n board for this dataset's n.
    fn check_sizes(&self, records: &[Record]) -> Result<()> {
        match records.iter().find(|r| r.board.size() != self.board_size) {
            Some(bad) => Err(HexError::InvalidBoardSize {
                expected: self.board_size,
                got: bad.board.size(),
            }),
            None => Ok(()),
        }
    }

    /// Append all records of one game.
    pub fn push_game(&mut self, records: Vec<Record>) -> Result<()> {
        self.check_sizes(&records)?;
        self.records.extend(records);
        self.games += 1;
        Ok(())
    }

    /// Labels in record order, as the learner expects them.
    #[must_use]
    pub fn labels(&self) -> Vec<u32> {
        self.records.iter().map(|r| u32::from(r.label)).collect()
    }

    /// Encode every record into one graph batch.
    pub fn to_batch(&self, encoder: &GraphEncoder) -> Result<GraphBatch> {
        encoder.encode_batch(self.records.iter().map(|r| (&r.board, r.to_move)))
    }

    /// Number of distinct (board, side to move) pairs.
    #[must_use]
    pub fn unique_positions(&self) -> usize {
        self.records
            .iter()
            .map(|r| (&r.board, r.to_move))
            .collect::<FxHashSet<_>>()
            .len()
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        let positives = self.records.iter().filter(|r| r.is_win()).count();
        DatasetStats {
            records: self.records.len(),
            games: self.games,
            positives,
            negatives: self.records.len() - positives,
            unique_positions: self.unique_positions(),
        }
    }

    /// Write the dataset with bincode.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| HexError::io(format!("create {}", path.display()), e))?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        log::info!("wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Read a dataset written by [`Dataset::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| HexError::io(format!("open {}", path.display()), e))?;
        let dataset: Dataset = bincode::deserialize_from(BufReader::new(file))?;
        dataset.check_sizes(&dataset.records)?;
        Ok(dataset)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
