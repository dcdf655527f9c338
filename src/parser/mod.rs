//! Parser module - turn SIA source text into intermediate records
//!
//! ```text
//! sia Producer {
//!     idle { produce! -> busy }
//!     busy { ack? -> idle, stop; -> done }
//!     done
//! }
//! ```
//!
//! A file holds either `sia` blocks or, as a shorthand for a single machine,
//! bare state declarations. Names are not resolved here.

use crate::model::{Document, SiaDef, Span, TargetDef, VertexDef};
use crate::{Error, Result};
use std::path::Path;

pub mod lexer;

use lexer::{Token, TokenKind};

/// Parse SIA source text.
///
/// `default_name` names the machine when the file holds bare states.
pub fn parse_source(src: &str, default_name: &str) -> Result<Document> {
    let tokens = lexer::tokenize(src)?;
    SourceParser::new(tokens).parse_document(default_name)
}

/// Default machine name for a source path
pub fn machine_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("sia")
        .to_string()
}

struct SourceParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl SourceParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        // tokenize always terminates the list with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, expected: &str) -> Error {
        let token = self.peek();
        Error::parse(
            token.span.line,
            token.span.column,
            format!("expected {}, found {}", expected, token.kind.describe()),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Span> {
        if self.peek().kind == kind {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<(String, Span)> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn parse_document(mut self, default_name: &str) -> Result<Document> {
        let first = self.peek().kind.clone();
        match first {
            TokenKind::Eof => Ok(Document::default()),
            TokenKind::Sia => {
                let mut machines = Vec::new();
                while self.peek().kind != TokenKind::Eof {
                    if self.peek().kind != TokenKind::Sia {
                        return Err(self.unexpected("'sia'"));
                    }
                    machines.push(self.parse_sia()?);
                }
                Ok(Document::new(machines))
            }
            _ => {
                let states = self.parse_states(TokenKind::Eof)?;
                Ok(Document::single(default_name, states))
            }
        }
    }

    fn parse_sia(&mut self) -> Result<SiaDef> {
        self.expect(TokenKind::Sia, "'sia'")?;
        let (name, span) = self.expect_ident("sia name")?;
        self.expect(TokenKind::LBrace, "'{'")?;
        let states = self.parse_states(TokenKind::RBrace)?;
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(SiaDef::new(name, states).with_span(span))
    }

    fn parse_states(&mut self, end: TokenKind) -> Result<Vec<VertexDef>> {
        let mut states = Vec::new();
        while self.peek().kind != end {
            if self.peek().kind == TokenKind::Sia {
                let span = self.peek().span;
                return Err(Error::parse(
                    span.line,
                    span.column,
                    "'sia' blocks cannot be mixed with bare states",
                ));
            }
            states.push(self.parse_state()?);
        }
        Ok(states)
    }

    fn parse_state(&mut self) -> Result<VertexDef> {
        let (name, span) = self.expect_ident("state name")?;
        let mut targets = Vec::new();

        if self.peek().kind == TokenKind::LBrace {
            self.advance();
            while self.peek().kind != TokenKind::RBrace {
                targets.push(self.parse_transition()?);
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                }
            }
            self.advance();
        }

        Ok(VertexDef::new(name, targets).with_span(span))
    }

    fn parse_transition(&mut self) -> Result<TargetDef> {
        let (action, _) = self.expect_ident("action name or '}'")?;
        let mode = match self.peek().kind.clone() {
            TokenKind::Mode(c) => {
                self.advance();
                c
            }
            _ => return Err(self.unexpected("mode '!', '?' or ';'")),
        };
        self.expect(TokenKind::Arrow, "'->'")?;
        let (target, span) = self.expect_ident("target state name")?;
        Ok(TargetDef::new(action, mode, target).with_span(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    #[test]
    fn test_parse_sia_blocks() {
        let src = r#"
sia Producer {
    idle { produce! -> busy }
    busy { ack? -> idle, stop; -> done, }
    done
}

sia Consumer {
    wait { produce? -> wait }
}
"#;
        let doc = parse_source(src, "unused").unwrap();
        assert_eq!(doc.machines.len(), 2);

        let producer = &doc.machines[0];
        assert_eq!(producer.name, "Producer");
        assert_eq!(producer.span, Some(Span::new(2, 5)));
        let names: Vec<_> = producer.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["idle", "busy", "done"]);

        let busy = &producer.states[1];
        assert_eq!(busy.targets.len(), 2);
        assert_eq!(busy.targets[1].action, "stop");
        assert_eq!(busy.targets[1].mode, Mode(';'));
        assert_eq!(busy.targets[1].target, "done");
        assert_eq!(busy.targets[1].span, Some(Span::new(4, 35)));

        assert_eq!(doc.machines[1].states[0].targets[0].target, "wait");
    }

    #[test]
    fn test_bare_states_use_default_name() {
        let doc = parse_source("A\nB { t1! -> A }", "proto").unwrap();
        assert_eq!(doc.machines.len(), 1);
        assert_eq!(doc.machines[0].name, "proto");
        assert_eq!(doc.machines[0].states.len(), 2);
        assert!(doc.machines[0].states[0].targets.is_empty());
    }

    #[test]
    fn test_commas_are_optional_between_transitions() {
        let doc = parse_source("A { x! -> A y? -> A }", "m").unwrap();
        assert_eq!(doc.machines[0].states[0].targets.len(), 2);
    }

    #[test]
    fn test_empty_source() {
        let doc = parse_source("// nothing here\n", "m").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_missing_mode() {
        let err = parse_source("A { go -> B }", "m").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1:8: parse error: expected mode '!', '?' or ';', found '->'"
        );
    }

    #[test]
    fn test_mixing_blocks_and_bare_states() {
        let err = parse_source("A\nsia P { B }", "m").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, column: 1, .. }));

        let err = parse_source("sia P { B }\nC", "m").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, column: 1, .. }));
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_source("sia P { A { x! -> A }", "m").unwrap_err();
        assert_eq!(
            err.to_string(),
            "1:22: parse error: expected state name, found end of file"
        );
    }

    #[test]
    fn test_machine_name_for_path() {
        assert_eq!(machine_name_for(Path::new("dir/handshake.sia")), "handshake");
        assert_eq!(machine_name_for(Path::new("")), "sia");
    }
}
