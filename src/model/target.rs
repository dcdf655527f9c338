//! Transition records

use crate::model::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque single-character mode tag of a transition.
///
/// The source domain uses `!` (output), `?` (input) and `;` (internal), but
/// the value is carried through to the graph without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mode(pub char);

impl From<char> for Mode {
    fn from(c: char) -> Self {
        Mode(c)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unresolved transition: `action mode -> target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDef {
    pub action: String,
    pub mode: Mode,
    /// Name of the state this transition leads to
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl TargetDef {
    pub fn new(action: impl Into<String>, mode: impl Into<Mode>, target: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            mode: mode.into(),
            target: target.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}
