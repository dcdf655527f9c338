//! Non-fatal problems found while building graphs
//!
//! Diagnostics are appended in the order they are encountered and are never
//! reordered or deduplicated. Whether they affect the exit status is up to the
//! caller.

use crate::model::Span;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single non-fatal construction problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A state name was declared more than once in the same machine
    DuplicateDefinition { name: String, span: Option<Span> },

    /// A transition targets a state that was never declared
    UndefinedReference { name: String, span: Option<Span> },

    /// A machine name was declared more than once in the same document
    DuplicateMachine { name: String, span: Option<Span> },
}

impl Diagnostic {
    /// Name the diagnostic is about
    pub fn name(&self) -> &str {
        match self {
            Diagnostic::DuplicateDefinition { name, .. }
            | Diagnostic::UndefinedReference { name, .. }
            | Diagnostic::DuplicateMachine { name, .. } => name,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Diagnostic::DuplicateDefinition { span, .. }
            | Diagnostic::UndefinedReference { span, .. }
            | Diagnostic::DuplicateMachine { span, .. } => *span,
        }
    }

    /// Render against a source file, `file:line:col: error: message`
    pub fn display_with<'a>(&'a self, ctx: &'a SourceContext) -> impl fmt::Display + 'a {
        Rendered { diag: self, ctx }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateDefinition { name, .. } => {
                write!(f, "redefinition of '{}'", name)
            }
            Diagnostic::UndefinedReference { name, .. } => {
                write!(f, "use of undeclared identifier '{}'", name)
            }
            Diagnostic::DuplicateMachine { name, .. } => {
                write!(f, "redefinition of sia '{}'", name)
            }
        }
    }
}

/// Where diagnostics came from, passed explicitly to rendering
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub file: PathBuf,
}

impl SourceContext {
    pub fn new(file: impl AsRef<Path>) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
        }
    }
}

struct Rendered<'a> {
    diag: &'a Diagnostic,
    ctx: &'a SourceContext,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.span() {
            Some(span) => write!(
                f,
                "{}:{}: error: {}",
                self.ctx.file.display(),
                span,
                self.diag
            ),
            None => write!(f, "{}: error: {}", self.ctx.file.display(), self.diag),
        }
    }
}

/// Ordered, append-only list of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, diag: Diagnostic) {
        tracing::debug!("{}", diag);
        self.entries.push(diag);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duplicate_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| {
                matches!(
                    d,
                    Diagnostic::DuplicateDefinition { .. } | Diagnostic::DuplicateMachine { .. }
                )
            })
            .count()
    }

    pub fn undefined_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::UndefinedReference { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let dup = Diagnostic::DuplicateDefinition {
            name: "A".to_string(),
            span: None,
        };
        assert_eq!(dup.to_string(), "redefinition of 'A'");

        let undef = Diagnostic::UndefinedReference {
            name: "Z".to_string(),
            span: None,
        };
        assert_eq!(undef.to_string(), "use of undeclared identifier 'Z'");
    }

    #[test]
    fn test_render_with_context() {
        let ctx = SourceContext::new("proto.sia");

        let with_span = Diagnostic::UndefinedReference {
            name: "Z".to_string(),
            span: Some(Span::new(4, 12)),
        };
        assert_eq!(
            with_span.display_with(&ctx).to_string(),
            "proto.sia:4:12: error: use of undeclared identifier 'Z'"
        );

        let without_span = Diagnostic::DuplicateMachine {
            name: "P".to_string(),
            span: None,
        };
        assert_eq!(
            without_span.display_with(&ctx).to_string(),
            "proto.sia: error: redefinition of sia 'P'"
        );
    }

    #[test]
    fn test_collector_keeps_order_and_counts() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::DuplicateDefinition {
            name: "b".to_string(),
            span: None,
        });
        diags.push(Diagnostic::UndefinedReference {
            name: "x".to_string(),
            span: None,
        });
        diags.push(Diagnostic::UndefinedReference {
            name: "y".to_string(),
            span: None,
        });

        let names: Vec<_> = diags.iter().map(Diagnostic::name).collect();
        assert_eq!(names, vec!["b", "x", "y"]);
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.duplicate_count(), 1);
        assert_eq!(diags.undefined_count(), 2);
    }
}
