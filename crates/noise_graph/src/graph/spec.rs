//! Specification types for authoring module graphs.
use std::collections::HashMap;

use tracing::warn;

use crate::graph::{ModuleId, ModuleSpec};

/// A declarative module graph: node specs keyed by id.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ModuleGraphSpec {
    pub nodes: HashMap<ModuleId, ModuleSpec>,
}

impl ModuleGraphSpec {
    /// Add a node to the graph specification, replacing any node with the same id.
    pub fn add(&mut self, id: &str, spec: ModuleSpec) -> &mut Self {
        if self.nodes.insert(id.to_string(), spec).is_some() {
            warn!("Module '{}' was already specified; replacing it.", id);
        }
        self
    }

    /// Remove a node from the graph specification.
    pub fn remove(&mut self, id: &str) -> Option<ModuleSpec> {
        self.nodes.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&ModuleSpec> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
