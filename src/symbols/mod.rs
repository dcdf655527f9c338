//! Symbol tables used while building graphs

pub mod registry;

pub use registry::{DuplicateName, GraphId, VertexRegistry};
