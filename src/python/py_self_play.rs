//! Self-play and dataset bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::prelude::*;

use crate::training::{self, Dataset, SelfPlayConfig, SelfPlayGenerator};

use super::py_core::board_codes;
use super::py_graph::{PyGraphBatch, PyGraphEncoder};

/// Python wrapper for SelfPlayConfig.
#[pyclass(name = "SelfPlayConfig")]
#[derive(Clone)]
pub struct PySelfPlayConfig(pub SelfPlayConfig);

#[pymethods]
impl PySelfPlayConfig {
    /// Create a new self-play configuration.
    ///
    /// # Arguments
    /// - board_size: Side length of the board (default: 7)
    /// - games: Number of random games (default: 2000)
    /// - seed: Seed for the run (default: 1)
    /// - keep_undecided: Keep games without a winner (default: False)
    #[new]
    #[pyo3(signature = (board_size = 7, games = 2000, seed = 1, keep_undecided = false))]
    fn new(board_size: usize, games: usize, seed: u64, keep_undecided: bool) -> Self {
        Self(
            SelfPlayConfig::default()
                .with_board_size(board_size)
                .with_games(games)
                .with_seed(seed)
                .with_keep_undecided(keep_undecided),
        )
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.0.board_size
    }

    #[getter]
    fn games(&self) -> usize {
        self.0.games
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn keep_undecided(&self) -> bool {
        self.0.keep_undecided
    }

    /// Run self-play with this configuration.
    fn generate(&self) -> PyResult<PyDataset> {
        let dataset = SelfPlayGenerator::new(self.0.clone())?.generate()?;
        Ok(PyDataset(dataset))
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayConfig(n={}, games={}, seed={}, keep_undecided={})",
            self.0.board_size, self.0.games, self.0.seed, self.0.keep_undecided
        )
    }
}

/// Python wrapper for Dataset.
#[pyclass(name = "Dataset")]
pub struct PyDataset(pub Dataset);

#[pymethods]
impl PyDataset {
    /// Read a dataset written by `save`.
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        Ok(Self(Dataset::load(path)?))
    }

    fn save(&self, path: &str) -> PyResult<()> {
        Ok(self.0.save(path)?)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.0.board_size()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    #[getter]
    fn games(&self) -> usize {
        self.0.games()
    }

    /// Boards as an [N, n, n] int8 array.
    fn boards<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<i8>>> {
        let n = self.0.board_size();
        let flat: Vec<i8> = self.0.iter().flat_map(|r| board_codes(&r.board)).collect();
        PyArray1::from_vec_bound(py, flat).reshape([self.0.len(), n, n])
    }

    /// Player to move per record, 1 (X) or 2 (O).
    fn to_move<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let codes: Vec<u8> = self.0.iter().map(|r| r.to_move.code()).collect();
        PyArray1::from_vec_bound(py, codes)
    }

    /// Labels per record.
    fn labels<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_vec_bound(py, self.0.labels())
    }

    /// Encode every record into one graph batch.
    fn to_batch(&self, encoder: &PyGraphEncoder) -> PyResult<PyGraphBatch> {
        encoder.encode_dataset(&self.0)
    }

    /// Summary counts: records, games, positives, negatives, unique positions.
    fn stats(&self) -> (usize, usize, usize, usize, usize) {
        let s = self.0.stats();
        (s.records, s.games, s.positives, s.negatives, s.unique_positions)
    }

    fn __repr__(&self) -> String {
        format!(
            "Dataset(n={}, records={}, games={}, seed={})",
            self.0.board_size(),
            self.0.len(),
            self.0.games(),
            self.0.seed()
        )
    }
}

/// Generate random self-play games on an empty n×n board.
#[pyfunction]
#[pyo3(signature = (n = 7, games = 2000, seed = 1))]
pub fn make_dataset(n: usize, games: usize, seed: u64) -> PyResult<PyDataset> {
    Ok(PyDataset(training::make_dataset(n, games, seed)?))
}
