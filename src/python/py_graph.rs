//! Graph encoding bindings for Python.
//!
//! The external learner builds its own graph objects from these exports:
//! node names, labelled edge triples, and per-sample symbol names or a
//! one-hot symbol matrix.

use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::nn::{EdgeKind, GraphBatch, GraphEncoder, NodeKind, Signature, Symbol};
use crate::training::Dataset;

use super::py_core::{board_from_array, player_from_code};

fn node_name(kind: NodeKind) -> String {
    match kind {
        NodeKind::Cell(mv) => format!("Cell_{}_{}", mv.row, mv.col),
        NodeKind::Goal(goal) => goal.name().to_string(),
    }
}

/// Python view of a batch signature.
#[pyclass(name = "Signature", frozen)]
#[derive(Clone)]
pub struct PySignature(pub Signature);

#[pymethods]
impl PySignature {
    #[getter]
    fn board_size(&self) -> usize {
        self.0.board_size
    }

    #[getter]
    fn node_count(&self) -> usize {
        self.0.node_count
    }

    #[getter]
    fn edge_count(&self) -> usize {
        self.0.edge_count
    }

    #[getter]
    fn symbol_count(&self) -> usize {
        self.0.symbol_count
    }

    #[getter]
    fn edge_kind_count(&self) -> usize {
        self.0.edge_kind_count
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __repr__(&self) -> String {
        format!(
            "Signature(n={}, nodes={}, edges={}, symbols={}, edge_kinds={})",
            self.0.board_size,
            self.0.node_count,
            self.0.edge_count,
            self.0.symbol_count,
            self.0.edge_kind_count
        )
    }
}

/// Python wrapper for GraphEncoder.
#[pyclass(name = "GraphEncoder")]
pub struct PyGraphEncoder {
    inner: GraphEncoder,
}

#[pymethods]
impl PyGraphEncoder {
    #[new]
    fn new(board_size: usize) -> Self {
        Self {
            inner: GraphEncoder::new(board_size),
        }
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.inner.board_size()
    }

    /// Node names in node-id order.
    fn node_names(&self) -> Vec<String> {
        self.inner
            .topology()
            .nodes()
            .map(|(_, node)| node_name(node.kind))
            .collect()
    }

    /// Edges as (from, to, label) triples in construction order.
    fn edges(&self) -> Vec<(u32, u32, &'static str)> {
        self.inner
            .topology()
            .edges()
            .map(|e| (e.from.0, e.to.0, e.kind.name()))
            .collect()
    }

    /// The node symbol vocabulary.
    #[staticmethod]
    fn symbols() -> Vec<&'static str> {
        Symbol::ALL.iter().map(|s| s.name()).collect()
    }

    /// The edge label vocabulary.
    #[staticmethod]
    fn edge_kinds() -> Vec<&'static str> {
        EdgeKind::ALL.iter().map(|k| k.name()).collect()
    }

    fn signature(&self) -> PySignature {
        PySignature(self.inner.signature())
    }

    /// Encode boards, each paired with the code of the player to move.
    fn encode(
        &self,
        boards: Vec<PyReadonlyArray2<'_, i8>>,
        to_move: Vec<u8>,
    ) -> PyResult<PyGraphBatch> {
        if boards.len() != to_move.len() {
            return Err(PyValueError::new_err(format!(
                "got {} boards but {} players to move",
                boards.len(),
                to_move.len()
            )));
        }
        let mut batch = self.inner.empty_batch(boards.len());
        for (index, (board, player)) in boards.iter().zip(to_move).enumerate() {
            let board = board_from_array(board)?;
            batch.populate_properties(index, &board, player_from_code(player)?)?;
        }
        Ok(PyGraphBatch { inner: batch })
    }

    fn __repr__(&self) -> String {
        let topology = self.inner.topology();
        format!(
            "GraphEncoder(n={}, nodes={}, edges={})",
            topology.size(),
            topology.node_count(),
            topology.edge_count()
        )
    }
}

impl PyGraphEncoder {
    pub(crate) fn encode_dataset(&self, dataset: &Dataset) -> PyResult<PyGraphBatch> {
        Ok(PyGraphBatch {
            inner: dataset.to_batch(&self.inner)?,
        })
    }
}

/// Python wrapper for GraphBatch.
#[pyclass(name = "GraphBatch")]
pub struct PyGraphBatch {
    pub(crate) inner: GraphBatch,
}

#[pymethods]
impl PyGraphBatch {
    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn signature(&self) -> PySignature {
        PySignature(self.inner.signature())
    }

    fn is_compatible(&self, other: &PyGraphBatch) -> bool {
        self.inner.is_compatible(&other.inner)
    }

    /// Symbol names per node for one sample.
    fn node_symbols(&self, index: usize) -> PyResult<Vec<Vec<&'static str>>> {
        let sample = self.inner.sample(index)?;
        Ok(sample
            .iter()
            .map(|set| set.iter().map(Symbol::name).collect())
            .collect())
    }

    /// One-hot symbol matrix for one sample, shape [nodes, symbols].
    fn symbol_matrix<'py>(&self, py: Python<'py>, index: usize) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let sample = self.inner.sample(index)?;
        let width = Symbol::ALL.len();
        let mut flat = Vec::with_capacity(sample.len() * width);
        for set in sample {
            flat.extend(Symbol::ALL.iter().map(|&s| u8::from(set.contains(s))));
        }
        PyArray1::from_vec_bound(py, flat).reshape([sample.len(), width])
    }

    fn __repr__(&self) -> String {
        let sig = self.inner.signature();
        format!(
            "GraphBatch(len={}, n={}, nodes={})",
            self.inner.len(),
            sig.board_size,
            sig.node_count
        )
    }
}
