//! Graph module - build attributed state graphs from SIA records

use crate::Result;
use crate::model::VertexDef;

pub mod builder;
pub mod document;
pub mod sia_graph;

// Re-export key types
pub use builder::{BuildOutput, GraphBuilder};
pub use document::{DocumentOutput, build_document};
pub use sia_graph::{GraphStats, SiaGraph, StateNode, TransitionEdge};

/// Build the graph of a single machine from its state declarations
pub fn build_graph(name: &str, states: Vec<VertexDef>) -> Result<BuildOutput> {
    GraphBuilder::new(name).build(states)
}
