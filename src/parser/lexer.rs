//! Tokenizer for SIA source text

use crate::model::Span;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

const TOKEN_PATTERN: &str = r"\A(?:(?P<ws>[ \t\r\n]+)|(?P<comment>//[^\n]*)|(?P<arrow>->)|(?P<ident>[A-Za-z0-9_]+)|(?P<punct>[{},])|(?P<mode>[!?;]))";

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"));

pub const KEYWORD_SIA: &str = "sia";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Sia,
    Ident(String),
    Mode(char),
    Arrow,
    LBrace,
    RBrace,
    Comma,
    Eof,
}

impl TokenKind {
    /// Human readable form for error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Sia => "keyword 'sia'".to_string(),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Mode(c) => format!("mode '{}'", c),
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

/// Whether `s` would lex as a single identifier token
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Split `src` into tokens, dropping whitespace and comments.
///
/// The returned list always ends with a single [`TokenKind::Eof`].
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = src;
    let mut line = 1;
    let mut column = 1;

    while !rest.is_empty() {
        let span = Span::new(line, column);
        let Some(caps) = TOKEN.captures(rest) else {
            let c = rest.chars().next().unwrap_or_default();
            return Err(Error::parse(line, column, format!("unexpected character '{}'", c)));
        };

        let text = caps.get(0).map_or("", |m| m.as_str());
        let kind = if let Some(ident) = caps.name("ident") {
            match ident.as_str() {
                KEYWORD_SIA => Some(TokenKind::Sia),
                name => Some(TokenKind::Ident(name.to_string())),
            }
        } else if let Some(mode) = caps.name("mode") {
            mode.as_str().chars().next().map(TokenKind::Mode)
        } else if caps.name("arrow").is_some() {
            Some(TokenKind::Arrow)
        } else if let Some(punct) = caps.name("punct") {
            match punct.as_str() {
                "{" => Some(TokenKind::LBrace),
                "}" => Some(TokenKind::RBrace),
                _ => Some(TokenKind::Comma),
            }
        } else {
            None
        };

        if let Some(kind) = kind {
            tokens.push(Token { kind, span });
        }

        for c in text.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        rest = &rest[text.len()..];
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(line, column),
    });
    Ok(tokens)
}
