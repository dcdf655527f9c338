//! Graph export - serialize a built [`SiaGraph`] to an interchange format

use crate::Result;
use crate::graph::SiaGraph;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

pub mod gml;
pub mod graphml;
pub mod json;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// http://graphml.graphdrawing.org/
    #[default]
    Graphml,
    /// Graph Modelling Language
    Gml,
    /// Node/edge lists as JSON
    Json,
}

impl GraphFormat {
    /// File extension used for default output paths
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFormat::Graphml => "graphml",
            GraphFormat::Gml => "gml",
            GraphFormat::Json => "json",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write `graph` to `w` in the requested format
pub fn write_graph(w: &mut impl Write, graph: &SiaGraph, format: GraphFormat) -> Result<()> {
    tracing::debug!("Writing graph '{}' as {}", graph.name, format);
    match format {
        GraphFormat::Graphml => graphml::write(w, graph),
        GraphFormat::Gml => gml::write(w, graph),
        GraphFormat::Json => json::write(w, graph),
    }
}
