//! This module defines all error types used throughout the application.
//!
//! Per-record problems found while building a graph (duplicate states,
//! undefined targets) are *not* errors: they are collected as
//! [`Diagnostic`](crate::diagnostics::Diagnostic) values. Only conditions that
//! prevent any graph from being produced end up here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Lexical or syntax error in a SIA source file
    #[error("{line}:{column}: parse error: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// No vertex definitions to build a graph from
    #[error("no state definitions found{}", in_machine(.machine))]
    EmptyInput { machine: Option<String> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph serialization errors
    #[error("Export error: {0}")]
    Export(String),

    /// Record list deserialization errors (JSON input)
    #[error("Input error in {file:?}: {message}")]
    Input { file: PathBuf, message: String },

    /// Diagnostics were reported while running in strict mode
    #[error("{0} error(s) reported")]
    Strict(usize),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn in_machine(machine: &Option<String>) -> String {
    machine
        .as_ref()
        .map(|m| format!(" in sia '{}'", m))
        .unwrap_or_default()
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a parse error at the given source position
    pub fn parse(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: msg.into(),
        }
    }

    /// Create an empty input error, optionally naming the offending machine
    pub fn empty_input(machine: Option<&str>) -> Self {
        Self::EmptyInput {
            machine: machine.map(str::to_string),
        }
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Check if error is the fatal empty input condition
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::parse(3, 7, "expected '->'");
        assert_eq!(err.to_string(), "3:7: parse error: expected '->'");
    }

    #[test]
    fn test_empty_input() {
        let err = Error::empty_input(None);
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "no state definitions found");

        let err = Error::empty_input(Some("Producer"));
        assert_eq!(
            err.to_string(),
            "no state definitions found in sia 'Producer'"
        );

        let err = Error::custom("other");
        assert!(!err.is_empty_input());
    }
}
