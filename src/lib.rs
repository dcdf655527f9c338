//! SIA to graph translator
//!
//! Turns textual descriptions of synchronous interface automata (SIAs) into
//! attributed directed multigraphs ready for GraphML or GML export.
//!
//! This library provides functionality for:
//! - Parsing SIA source text into intermediate state/transition records
//! - Resolving state names in two passes, collecting duplicate and undefined
//!   name diagnostics instead of failing
//! - Building one graph per machine, with `label`, `action` and `mode` attributes
//! - Serializing graphs as GraphML, GML or JSON
//!
//! ```
//! use sia2graph::graph::build_graph;
//! use sia2graph::model::{TargetDef, VertexDef};
//!
//! let out = build_graph("P", vec![
//!     VertexDef::leaf("A"),
//!     VertexDef::new("B", vec![TargetDef::new("t1", '!', "A")]),
//! ]).unwrap();
//! assert_eq!(out.graph.edge_count(), 1);
//! assert!(out.diagnostics.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod graph;
pub mod model;
pub mod parser;
pub mod symbols;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
