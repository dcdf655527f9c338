//! State records

use crate::model::{Span, TargetDef};
use serde::{Deserialize, Serialize};

/// A state declaration and its outgoing transitions, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDef {
    pub name: String,
    #[serde(default)]
    pub targets: Vec<TargetDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl VertexDef {
    pub fn new(name: impl Into<String>, targets: Vec<TargetDef>) -> Self {
        Self {
            name: name.into(),
            targets,
            span: None,
        }
    }

    /// A state without outgoing transitions
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}
