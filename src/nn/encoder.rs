//! Board-to-graph encoding.
//!
//! Encoding happens in two stages. [`build_topology`] wires the nodes and
//! edges for a board size; it depends only on `n`. A [`GraphBatch`] then
//! holds one copy of that topology plus per-sample node properties, filled
//! in by [`GraphBatch::populate_properties`] for each (board, side to move).
//!
//! Cell properties:
//! - exactly one content symbol (`X`, `O` or `Empty`)
//! - one side symbol per board edge the cell lies on (two on corners)
//! - the side-to-move symbol, repeated on every cell
//!
//! Goal nodes carry no properties; their identity is in the edges.

use crate::core::{Cell, HexError, Player, Result};
use crate::rules::{neighbors, Board, Move};

use super::graph::{EdgeKind, Goal, GraphTopology, NodeId, NodeKind, Signature, Symbol, SymbolSet};

/// Maximum out-degree of a cell node.
const CELL_CAPACITY: usize = 6;

/// Build the graph topology for an n×n board.
///
/// Node order: cells row-major, then Top, Bottom, Left, Right.
/// Edge order: for every cell row-major, one edge per on-board neighbour in
/// direction order; then `Top -> (0, j)` and `(n-1, j) -> Bottom` for each
/// column; then `Left -> (i, 0)` and `(i, n-1) -> Right` for each row.
#[must_use]
pub fn build_topology(n: usize) -> GraphTopology {
    let mut topology = GraphTopology::with_size(n);

    for row in 0..n {
        for col in 0..n {
            topology.add_node(NodeKind::Cell(Move::new(row, col)), CELL_CAPACITY);
        }
    }
    for goal in Goal::ALL {
        topology.add_node(NodeKind::Goal(goal), n * n);
    }

    for row in 0..n {
        for col in 0..n {
            let from = topology.cell_node(Move::new(row, col));
            for (dir, to) in neighbors(n, row, col) {
                let to = topology.cell_node(to);
                topology.add_edge(from, to, EdgeKind::Adjacent(dir));
            }
        }
    }

    let [top, bottom, left, right] = Goal::ALL.map(|g| topology.goal_node(g));
    for col in 0..n {
        let first = topology.cell_node(Move::new(0, col));
        let last = topology.cell_node(Move::new(n - 1, col));
        topology.add_edge(top, first, EdgeKind::Boundary);
        topology.add_edge(last, bottom, EdgeKind::Boundary);
    }
    for row in 0..n {
        let first = topology.cell_node(Move::new(row, 0));
        let last = topology.cell_node(Move::new(row, n - 1));
        topology.add_edge(left, first, EdgeKind::Boundary);
        topology.add_edge(last, right, EdgeKind::Boundary);
    }

    topology
}

/// Symbols for the cell at `mv`.
#[must_use]
pub fn cell_symbols(board: &Board, mv: Move, to_move: Player) -> SymbolSet {
    let n = board.size();
    let mut set = SymbolSet::new();

    set.insert(match board[mv] {
        Cell::X => Symbol::X,
        Cell::O => Symbol::O,
        Cell::Empty => Symbol::Empty,
    });
    if mv.row == 0 {
        set.insert(Symbol::SideTop);
    }
    if mv.row == n - 1 {
        set.insert(Symbol::SideBottom);
    }
    if mv.col == 0 {
        set.insert(Symbol::SideLeft);
    }
    if mv.col == n - 1 {
        set.insert(Symbol::SideRight);
    }
    set.insert(match to_move {
        Player::X => Symbol::ToMoveX,
        Player::O => Symbol::ToMoveO,
    });
    set
}

/// A batch of graphs sharing one topology.
#[derive(Clone, Debug)]
pub struct GraphBatch {
    topology: GraphTopology,
    signature: Signature,
    /// Per sample, one symbol set per node. `None` until populated.
    samples: Vec<Option<Vec<SymbolSet>>>,
}

impl GraphBatch {
    /// Allocate `batch_size` unpopulated samples over `topology`.
    #[must_use]
    pub fn new(topology: GraphTopology, batch_size: usize) -> Self {
        let signature = topology.signature();
        Self {
            topology,
            signature,
            samples: vec![None; batch_size],
        }
    }

    /// Attach node properties for sample `index`, replacing any earlier ones.
    pub fn populate_properties(&mut self, index: usize, board: &Board, to_move: Player) -> Result<()> {
        let len = self.samples.len();
        if index >= len {
            return Err(HexError::IndexOutOfRange { index, len });
        }
        let n = self.topology.size();
        if board.size() != n {
            return Err(HexError::InvalidBoardSize {
                expected: n,
                got: board.size(),
            });
        }

        let mut props = vec![SymbolSet::new(); self.topology.node_count()];
        for (mv, _) in board.iter() {
            props[self.topology.cell_node(mv).index()] = cell_symbols(board, mv, to_move);
        }
        self.samples[index] = Some(props);
        Ok(())
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn topology(&self) -> &GraphTopology {
        &self.topology
    }

    /// Signature computed when the batch was created.
    #[must_use]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Whether two batches can be consumed by the same fitted learner.
    #[must_use]
    pub fn is_compatible(&self, other: &GraphBatch) -> bool {
        self.signature == other.signature
    }

    #[must_use]
    pub fn is_populated(&self, index: usize) -> bool {
        self.samples.get(index).is_some_and(Option::is_some)
    }

    /// Error on the first sample that has not been populated.
    pub fn ensure_complete(&self) -> Result<()> {
        match self.samples.iter().position(Option::is_none) {
            Some(index) => Err(HexError::IncompleteBatch { index }),
            None => Ok(()),
        }
    }

    /// All node symbol sets of sample `index`.
    pub fn sample(&self, index: usize) -> Result<&[SymbolSet]> {
        let len = self.samples.len();
        self.samples
            .get(index)
            .ok_or(HexError::IndexOutOfRange { index, len })?
            .as_deref()
            .ok_or(HexError::IncompleteBatch { index })
    }

    /// Symbols of one node of sample `index`.
    pub fn node_symbols(&self, index: usize, node: NodeId) -> Result<SymbolSet> {
        let props = self.sample(index)?;
        props.get(node.index()).copied().ok_or(HexError::NodeOutOfRange {
            node: node.index(),
            len: props.len(),
        })
    }

    /// Recover the board and side to move from sample `index`.
    pub fn decode(&self, index: usize) -> Result<(Board, Player)> {
        let props = self.sample(index)?;
        let n = self.topology.size();

        let mut rows = vec![vec![Cell::Empty; n]; n];
        let mut to_move = None;
        for (row, cells) in rows.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let set = props[self.topology.cell_node(Move::new(row, col)).index()];
                *cell = if set.contains(Symbol::X) {
                    Cell::X
                } else if set.contains(Symbol::O) {
                    Cell::O
                } else if set.contains(Symbol::Empty) {
                    Cell::Empty
                } else {
                    return Err(HexError::IncompleteBatch { index });
                };
                if to_move.is_none() {
                    to_move = if set.contains(Symbol::ToMoveX) {
                        Some(Player::X)
                    } else if set.contains(Symbol::ToMoveO) {
                        Some(Player::O)
                    } else {
                        None
                    };
                }
            }
        }

        let to_move = to_move.ok_or(HexError::IncompleteBatch { index })?;
        Ok((Board::from_rows(&rows)?, to_move))
    }
}

/// Encoder for one board size.
///
/// Builds the topology once and clones it into every batch it creates.
#[derive(Clone, Debug)]
pub struct GraphEncoder {
    topology: GraphTopology,
}

impl GraphEncoder {
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self {
            topology: build_topology(board_size),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.topology.size()
    }

    #[must_use]
    pub fn topology(&self) -> &GraphTopology {
        &self.topology
    }

    #[must_use]
    pub fn signature(&self) -> Signature {
        self.topology.signature()
    }

    /// An unpopulated batch of `batch_size` samples.
    #[must_use]
    pub fn empty_batch(&self, batch_size: usize) -> GraphBatch {
        GraphBatch::new(self.topology.clone(), batch_size)
    }

    /// Encode every (board, side to move) pair into one batch.
    pub fn encode_batch<'a, I>(&self, positions: I) -> Result<GraphBatch>
    where
        I: IntoIterator<Item = (&'a Board, Player)>,
        I::IntoIter: ExactSizeIterator,
    {
        let positions = positions.into_iter();
        let mut batch = self.empty_batch(positions.len());
        for (index, (board, to_move)) in positions.enumerate() {
            batch.populate_properties(index, board, to_move)?;
        }
        Ok(batch)
    }

    /// Encode a single position as a batch of one.
    pub fn encode_one(&self, board: &Board, to_move: Player) -> Result<GraphBatch> {
        self.encode_batch(std::iter::once((board, to_move)))
    }
}
