//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::export::GraphFormat;
use crate::{Config, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Translate SIA descriptions into GraphML or GML graphs
#[derive(Parser, Debug)]
#[command(name = "sia2graph")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Source file to translate
    #[arg(required_unless_present = "version")]
    pub file: Option<PathBuf>,

    /// Path to store the generated file [default: out.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the generated graph [default: graphml]
    #[arg(short, long, value_enum)]
    pub format: Option<GraphFormat>,

    /// Format of the source file
    #[arg(short, long, value_enum, default_value = "sia")]
    pub input: InputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config, `RUST_LOG` overrides both)
    #[arg(long, env = "SIA2GRAPH_LOG")]
    pub log_level: Option<String>,

    /// Fail if any diagnostic is reported
    #[arg(long)]
    pub strict: bool,

    /// Print a per-machine summary table to stdout
    #[arg(long)]
    pub stats: bool,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// Source file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// SIA description language
    Sia,
    /// Serialized intermediate records
    Json,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    if args.version {
        println!("{} v{}", crate::NAME, crate::VERSION);
        return Ok(());
    }
    commands::convert::execute(args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["sia2graph", "-o", "g.gml", "-f", "gml", "proto.sia"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("proto.sia")));
        assert_eq!(cli.output, Some(PathBuf::from("g.gml")));
        assert_eq!(cli.format, Some(GraphFormat::Gml));
        assert_eq!(cli.input, InputFormat::Sia);
        assert!(!cli.strict);
    }

    #[test]
    fn test_version_without_file() {
        let cli = Cli::try_parse_from(["sia2graph", "-v"]).unwrap();
        assert!(cli.version);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(Cli::try_parse_from(["sia2graph", "-f", "gml"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["sia2graph", "-f", "dot", "proto.sia"]).is_err());
    }
}
