//! Intermediate model - the records a parser hands to the graph builder
//!
//! Nothing in here is resolved: state names and target names are plain
//! strings until the [`GraphBuilder`](crate::graph::GraphBuilder) registers
//! and looks them up.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod target;
pub mod vertex;

// Re-export key types
pub use target::{Mode, TargetDef};
pub use vertex::VertexDef;

/// A 1-based position in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One named state machine and its state declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiaDef {
    pub name: String,
    #[serde(default)]
    pub states: Vec<VertexDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl SiaDef {
    pub fn new(name: impl Into<String>, states: Vec<VertexDef>) -> Self {
        Self {
            name: name.into(),
            states,
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Everything declared by one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub machines: Vec<SiaDef>,
}

impl Document {
    pub fn new(machines: Vec<SiaDef>) -> Self {
        Self { machines }
    }

    /// Wrap a bare state list as a single machine
    pub fn single(name: impl Into<String>, states: Vec<VertexDef>) -> Self {
        Self::new(vec![SiaDef::new(name, states)])
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}
