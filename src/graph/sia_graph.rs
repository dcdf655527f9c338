use crate::model::Mode;
use crate::symbols::GraphId;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Vertex attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    pub label: String,
}

/// Edge attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub action: String,
    pub mode: Mode,
    /// `action` immediately followed by `mode`
    pub label: String,
}

impl TransitionEdge {
    pub fn new(action: impl Into<String>, mode: Mode) -> Self {
        let action = action.into();
        let label = format!("{}{}", action, mode);
        Self {
            action,
            mode,
            label,
        }
    }
}

/// A directed multigraph of one state machine.
///
/// Vertices are only ever appended, so a vertex's [`GraphId`] is exactly its
/// petgraph node index. Self-loops and parallel edges are kept as-is.
#[derive(Debug, Clone)]
pub struct SiaGraph {
    /// Machine name, exported as the graph-level `name` attribute
    pub name: String,

    pub graph: DiGraph<StateNode, TransitionEdge>,
}

impl SiaGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: DiGraph::new(),
        }
    }

    /// Appends a vertex labelled `label` and returns its id.
    pub fn add_state(&mut self, label: impl Into<String>) -> GraphId {
        self.graph
            .add_node(StateNode {
                label: label.into(),
            })
            .index()
    }

    /// Appends an edge between two existing vertices.
    pub fn add_transition(&mut self, from: GraphId, to: GraphId, edge: TransitionEdge) -> EdgeIndex {
        self.graph
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), edge)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Label of the vertex with the given id
    pub fn label(&self, id: GraphId) -> Option<&str> {
        self.graph
            .node_weight(NodeIndex::new(id))
            .map(|n| n.label.as_str())
    }

    /// Vertices in id order
    pub fn states(&self) -> impl Iterator<Item = (GraphId, &StateNode)> {
        self.graph
            .node_indices()
            .map(|idx| (idx.index(), &self.graph[idx]))
    }

    /// Edges in creation order as `(source, target, attributes)`
    pub fn transitions(&self) -> impl Iterator<Item = (GraphId, GraphId, &TransitionEdge)> {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight()))
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_states: self.node_count(),
            total_transitions: self.edge_count(),
            self_loops: self.transitions().filter(|(s, t, _)| s == t).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub self_loops: usize,
}
