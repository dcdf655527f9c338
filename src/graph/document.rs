//! Building every machine declared in a document
//!
//! Machine names share the first-wins policy of state names: a repeated
//! `sia` block is reported and dropped as a whole. Each surviving machine is
//! built on its own, with its own registry.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::graph::{BuildOutput, GraphBuilder};
use crate::model::Document;
use crate::symbols::VertexRegistry;
use crate::{Error, Result};

/// Result of building a whole document
#[derive(Debug, Clone)]
pub struct DocumentOutput {
    /// One entry per distinct machine, in first-declaration order
    pub machines: Vec<BuildOutput>,

    /// Document-level diagnostics (repeated machine names)
    pub diagnostics: Diagnostics,
}

impl DocumentOutput {
    /// Number of diagnostics across the document and every machine
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
            + self
                .machines
                .iter()
                .map(|m| m.diagnostics.len())
                .sum::<usize>()
    }

    /// Document diagnostics followed by every machine's, in build order
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .chain(self.machines.iter().flat_map(|m| m.diagnostics.iter()))
    }
}

/// Build one graph per distinct machine in `document`
pub fn build_document(document: Document) -> Result<DocumentOutput> {
    if document.is_empty() {
        return Err(Error::empty_input(None));
    }

    let mut names = VertexRegistry::new();
    let mut diagnostics = Diagnostics::new();
    let mut machines = Vec::new();

    for sia in document.machines {
        if let Err(dup) = names.register(&sia.name) {
            diagnostics.push(Diagnostic::DuplicateMachine {
                name: dup.name,
                span: sia.span,
            });
            continue;
        }

        tracing::debug!("Building sia '{}'", sia.name);
        machines.push(GraphBuilder::new(&sia.name).build(sia.states)?);
    }

    Ok(DocumentOutput {
        machines,
        diagnostics,
    })
}
