//! Two-pass graph construction for a single machine
//!
//! Pass 1 registers every state name and creates its vertex. Pass 2 walks the
//! transitions of each registered state and resolves their targets against the
//! registry. Neither pass aborts on a bad record: duplicates and undefined
//! targets become [`Diagnostic`]s and the record is skipped.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::graph::{SiaGraph, TransitionEdge};
use crate::model::VertexDef;
use crate::symbols::{GraphId, VertexRegistry};
use crate::{Error, Result};

/// Result of building one machine
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: SiaGraph,
    pub diagnostics: Diagnostics,
}

/// Builds the graph of one machine from its state declarations
pub struct GraphBuilder {
    registry: VertexRegistry,
    graph: SiaGraph,
    diagnostics: Diagnostics,
}

impl GraphBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            registry: VertexRegistry::new(),
            graph: SiaGraph::new(name),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Consume the builder and the records, producing the graph and all
    /// diagnostics found along the way.
    ///
    /// Fails only when `states` is empty.
    pub fn build(mut self, states: Vec<VertexDef>) -> Result<BuildOutput> {
        if states.is_empty() {
            return Err(Error::empty_input(Some(&self.graph.name)));
        }

        tracing::debug!(
            "Building graph '{}' from {} state definitions",
            self.graph.name,
            states.len()
        );

        let registered = self.register_states(states);
        self.resolve_targets(registered);

        tracing::debug!(
            "Graph '{}': {} states, {} transitions, {} diagnostics",
            self.graph.name,
            self.graph.node_count(),
            self.graph.edge_count(),
            self.diagnostics.len()
        );

        Ok(BuildOutput {
            graph: self.graph,
            diagnostics: self.diagnostics,
        })
    }

    /// Pass 1: register names and create vertices.
    ///
    /// A rejected duplicate is dropped together with its own transitions.
    fn register_states(&mut self, states: Vec<VertexDef>) -> Vec<(GraphId, VertexDef)> {
        let mut registered = Vec::with_capacity(states.len());

        for state in states {
            match self.registry.register(&state.name) {
                Ok(id) => {
                    let vertex = self.graph.add_state(state.name.as_str());
                    debug_assert_eq!(id, vertex, "registry and graph ids diverged");
                    registered.push((id, state));
                }
                Err(dup) => {
                    tracing::debug!(
                        "Dropping duplicate '{}' ({} transitions discarded)",
                        dup.name,
                        state.targets.len()
                    );
                    self.diagnostics.push(Diagnostic::DuplicateDefinition {
                        name: dup.name,
                        span: state.span,
                    });
                }
            }
        }

        registered
    }

    /// Pass 2: resolve transition targets and create edges.
    fn resolve_targets(&mut self, registered: Vec<(GraphId, VertexDef)>) {
        for (from, state) in registered {
            for target in state.targets {
                let Some(to) = self.registry.resolve(&target.target) else {
                    self.diagnostics.push(Diagnostic::UndefinedReference {
                        name: target.target,
                        span: target.span,
                    });
                    continue;
                };

                self.graph
                    .add_transition(from, to, TransitionEdge::new(target.action, target.mode));
            }
        }
    }
}
