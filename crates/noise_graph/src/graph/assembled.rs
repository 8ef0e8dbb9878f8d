//! Compiled module graphs.
//!
//! A [`ModuleGraph`] is produced by [`GraphCompiler`](crate::graph::compiler::GraphCompiler)
//! and maps every node id to its instantiated, shared module.
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::graph::ModuleId;
use crate::module::ModuleRef;

/// Instantiated modules keyed by id, with the order they were built in.
#[derive(Clone)]
pub struct ModuleGraph {
    modules: HashMap<ModuleId, ModuleRef>,
    topo: Vec<ModuleId>,
}

impl ModuleGraph {
    pub(crate) fn new(modules: HashMap<ModuleId, ModuleRef>, topo: Vec<ModuleId>) -> Self {
        Self { modules, topo }
    }

    /// Returns the module built for `id`.
    pub fn get(&self, id: &str) -> Option<&ModuleRef> {
        self.modules.get(id)
    }

    /// Returns a shared handle to the module built for `id`.
    pub fn module(&self, id: &str) -> Result<ModuleRef> {
        self.modules
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownModule { id: id.to_string() })
    }

    /// Evaluates the module built for `id` at the given coordinate.
    pub fn evaluate(&self, id: &str, x: f32, y: f32, z: f32) -> Result<f32> {
        match self.modules.get(id) {
            Some(module) => Ok(module.evaluate(x, y, z)),
            None => Err(Error::UnknownModule { id: id.to_string() }),
        }
    }

    /// Node ids in build order; every node appears after all of its sources.
    pub fn topo(&self) -> &[ModuleId] {
        &self.topo
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for ModuleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleGraph")
            .field("topo", &self.topo)
            .finish()
    }
}
