//! Python bindings for hex-graph.
//!
//! The graph learner runs in Python; these bindings give it boards, rules,
//! self-play datasets and graph batches.
//!
//! # Quick Start
//!
//! ```python
//! import hex_graph as hg
//!
//! data = hg.make_dataset(n=5, games=100, seed=7)
//! boards, labels = data.boards(), data.labels()
//!
//! encoder = hg.GraphEncoder(5)
//! batch = data.to_batch(encoder)
//! print(encoder.edges()[:3], batch.node_symbols(0)[0])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_graph;
mod py_rules;
mod py_self_play;

pub use py_graph::*;
pub use py_rules::*;
pub use py_self_play::*;

/// hex-graph: Hex rules, graph encoding and self-play data.
#[pymodule]
fn hex_graph(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Rules
    m.add_function(wrap_pyfunction!(winner, m)?)?;
    m.add_function(wrap_pyfunction!(legal_moves, m)?)?;
    m.add_function(wrap_pyfunction!(apply_move, m)?)?;
    m.add_function(wrap_pyfunction!(opposite, m)?)?;
    m.add_function(wrap_pyfunction!(random_playout, m)?)?;

    // Graph encoding
    m.add_class::<PyGraphEncoder>()?;
    m.add_class::<PyGraphBatch>()?;
    m.add_class::<PySignature>()?;

    // Self-play
    m.add_class::<PySelfPlayConfig>()?;
    m.add_class::<PyDataset>()?;
    m.add_function(wrap_pyfunction!(make_dataset, m)?)?;

    Ok(())
}
