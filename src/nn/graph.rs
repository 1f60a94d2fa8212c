//! Typed graph topology for a Hex board.
//!
//! Nodes live in a flat arena addressed by [`NodeId`]: cells first in
//! row-major order, then the four goal nodes (top, bottom, left, right).
//! Edges are stored as outgoing lists on their source node, in insertion
//! order, so two topologies built for the same size are identical.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::{Direction, Move};

/// Index of a node in a [`GraphTopology`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Virtual node standing for one board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    Top,
    Bottom,
    Left,
    Right,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Top, Goal::Bottom, Goal::Left, Goal::Right];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Goal::Top => "XTop",
            Goal::Bottom => "XBottom",
            Goal::Left => "OLeft",
            Goal::Right => "ORight",
        }
    }
}

/// What a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Cell(Move),
    Goal(Goal),
}

/// Edge label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Cell-to-cell link in one of the six directions.
    Adjacent(Direction),
    /// Link between a goal node and a border cell.
    Boundary,
}

impl EdgeKind {
    /// Every edge label, directions first.
    pub const ALL: [EdgeKind; 7] = [
        EdgeKind::Adjacent(Direction::NE),
        EdgeKind::Adjacent(Direction::E),
        EdgeKind::Adjacent(Direction::SE),
        EdgeKind::Adjacent(Direction::SW),
        EdgeKind::Adjacent(Direction::W),
        EdgeKind::Adjacent(Direction::NW),
        EdgeKind::Boundary,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            EdgeKind::Adjacent(dir) => dir.index(),
            EdgeKind::Boundary => 6,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EdgeKind::Adjacent(dir) => dir.name(),
            EdgeKind::Boundary => "Boundary",
        }
    }
}

/// A directed, labelled edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
}

/// Node property symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
    Empty,
    SideTop,
    SideBottom,
    SideLeft,
    SideRight,
    ToMoveX,
    ToMoveO,
}

impl Symbol {
    /// The full node vocabulary, in bit order.
    pub const ALL: [Symbol; 9] = [
        Symbol::X,
        Symbol::O,
        Symbol::Empty,
        Symbol::SideTop,
        Symbol::SideBottom,
        Symbol::SideLeft,
        Symbol::SideRight,
        Symbol::ToMoveX,
        Symbol::ToMoveO,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
            Symbol::Empty => "Empty",
            Symbol::SideTop => "SideTop",
            Symbol::SideBottom => "SideBottom",
            Symbol::SideLeft => "SideLeft",
            Symbol::SideRight => "SideRight",
            Symbol::ToMoveX => "ToMoveX",
            Symbol::ToMoveO => "ToMoveO",
        }
    }

    /// Look a symbol up by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Symbol::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Set of symbols attached to one node, as a bitmask over [`Symbol::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolSet(u16);

impl SymbolSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, symbol: Symbol) {
        self.0 |= 1 << symbol.index();
    }

    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        self.0 & (1 << symbol.index()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Symbols in vocabulary order.
    pub fn iter(self) -> impl Iterator<Item = Symbol> {
        Symbol::ALL.into_iter().filter(move |&s| self.contains(s))
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolSet::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

/// Structural fingerprint of a topology and its vocabulary.
///
/// Two batches can be fed to the same fitted learner iff their signatures
/// are equal. Batch size is deliberately not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub board_size: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub symbol_count: usize,
    pub edge_kind_count: usize,
}

/// One arena slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Maximum number of outgoing edges.
    pub capacity: usize,
    edges: SmallVec<[Edge; 6]>,
}

impl Node {
    /// Outgoing edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Nodes and labelled edges for one board size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphTopology {
    size: usize,
    nodes: Vec<Node>,
    edge_count: usize,
}

impl GraphTopology {
    /// An empty arena for an n×n board.
    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            size,
            nodes: Vec::with_capacity(size * size + Goal::ALL.len()),
            edge_count: 0,
        }
    }

    pub(crate) fn add_node(&mut self, kind: NodeKind, capacity: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            capacity,
            edges: SmallVec::new(),
        });
        id
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind) {
        let node = &mut self.nodes[from.index()];
        debug_assert!(
            node.edges.len() < node.capacity,
            "{from} exceeds its edge capacity of {}",
            node.capacity
        );
        node.edges.push(Edge { from, to, kind });
        self.edge_count += 1;
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Every edge, grouped by source node.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.nodes.iter().flat_map(|n| n.edges.iter())
    }

    /// Node of the cell at `mv`.
    #[inline]
    #[must_use]
    pub fn cell_node(&self, mv: Move) -> NodeId {
        debug_assert!(mv.row < self.size && mv.col < self.size);
        NodeId::new((mv.row * self.size + mv.col) as u32)
    }

    /// Node of a goal.
    #[must_use]
    pub fn goal_node(&self, goal: Goal) -> NodeId {
        NodeId::new((self.size * self.size + goal.index()) as u32)
    }

    /// Number of real cell nodes.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature {
            board_size: self.size,
            node_count: self.nodes.len(),
            edge_count: self.edge_count,
            symbol_count: Symbol::ALL.len(),
            edge_kind_count: EdgeKind::ALL.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_names_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_name(symbol.name()), Some(symbol));
        }
        assert_eq!(Symbol::from_name("Nope"), None);
    }

    #[test]
    fn test_symbol_set() {
        let mut set = SymbolSet::new();
        assert!(set.is_empty());

        set.insert(Symbol::O);
        set.insert(Symbol::SideLeft);
        set.insert(Symbol::O);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Symbol::O));
        assert!(set.contains(Symbol::SideLeft));
        assert!(!set.contains(Symbol::X));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Symbol::O, Symbol::SideLeft]);

        let same: SymbolSet = [Symbol::SideLeft, Symbol::O].into_iter().collect();
        assert_eq!(set, same);
    }

    #[test]
    fn test_edge_kind_indices() {
        for (i, kind) in EdgeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(EdgeKind::Boundary.name(), "Boundary");
        assert_eq!(EdgeKind::Adjacent(Direction::SW).name(), "SW");
    }

    #[test]
    fn test_arena_ids() {
        let mut topology = GraphTopology::with_size(2);
        let a = topology.add_node(NodeKind::Cell(Move::new(0, 0)), 6);
        let b = topology.add_node(NodeKind::Cell(Move::new(0, 1)), 6);
        topology.add_edge(a, b, EdgeKind::Adjacent(Direction::E));

        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(topology.edge_count(), 1);
        assert_eq!(topology.node(a).edges()[0].to, b);
        assert!(topology.node(b).edges().is_empty());
        assert_eq!(format!("{b}"), "Node(1)");
    }
}
