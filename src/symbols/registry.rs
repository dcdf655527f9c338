//! Name to vertex id registry
//!
//! Ids are handed out densely in order of first successful registration.
//! An entry is never replaced or removed: the first definition of a name wins.

use std::collections::HashMap;
use thiserror::Error;

/// Dense, zero-based vertex id in the output graph
pub type GraphId = usize;

/// Returned when a name is registered a second time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{name}' is already registered with id {existing}")]
pub struct DuplicateName {
    pub name: String,
    pub existing: GraphId,
}

/// A name-keyed table of registered vertices, scoped to one build
#[derive(Debug, Default)]
pub struct VertexRegistry {
    ids: HashMap<String, GraphId>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning its new id.
    ///
    /// If the name is already present the existing mapping is left untouched
    /// and no id is consumed.
    pub fn register(&mut self, name: &str) -> Result<GraphId, DuplicateName> {
        if let Some(&existing) = self.ids.get(name) {
            return Err(DuplicateName {
                name: name.to_string(),
                existing,
            });
        }

        let id = self.ids.len();
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up the id of a registered name
    pub fn resolve(&self, name: &str) -> Option<GraphId> {
        self.ids.get(name).copied()
    }
}
