//! Host-provided modules looked up by id during graph assembly.
//!
//! Noise generators and other source modules live outside this crate. A graph refers to
//! them with [`ModuleSpec::external`] and the compiler resolves the id here, so every
//! external node naming the same id shares one instance.
//!
//! [`ModuleSpec::external`]: crate::graph::ModuleSpec::external
use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::module::{Module, ModuleRef};

/// Shared modules keyed by id.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    entries: HashMap<String, ModuleRef>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wraps `module` in a shared handle and stores it under `id`.
    ///
    /// Returns the module previously stored under `id`.
    pub fn register<M>(&mut self, id: impl Into<String>, module: M) -> Option<ModuleRef>
    where
        M: Module + 'static,
    {
        self.register_ref(id, Arc::new(module))
    }

    /// Stores an existing handle under `id`, returning the module it replaces.
    pub fn register_ref(&mut self, id: impl Into<String>, module: ModuleRef) -> Option<ModuleRef> {
        let id = id.into();
        let replaced = self.entries.insert(id, module);
        if replaced.is_some() {
            warn!("Replaced registered module; graphs compiled earlier keep the old one.");
        }
        replaced
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns a new handle to the module stored under `id`.
    pub fn get(&self, id: &str) -> Option<ModuleRef> {
        self.entries.get(id).map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Constant, FnSource, ModuleExt};

    #[test]
    fn registered_modules_resolve_by_id() {
        let mut registry = ModuleRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register("flat", Constant::new(0.5)).is_none());
        assert!(registry.register("ramp", FnSource::new(|x, _, _| x)).is_none());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("ramp"));

        let ramp = registry.get("ramp").expect("registered");
        assert_eq!(ramp.evaluate(0.25, 0.0, 0.0), 0.25);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn lookups_share_the_registered_instance() {
        let shared = Constant::new(1.0).into_ref();
        let mut registry = ModuleRegistry::new();
        registry.register_ref("one", Arc::clone(&shared));

        let first = registry.get("one").expect("registered");
        let second = registry.get("one").expect("registered");
        assert!(Arc::ptr_eq(&first, &shared));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn re_registering_returns_the_replaced_module() {
        let old = Constant::new(1.0).into_ref();
        let mut registry = ModuleRegistry::new();
        registry.register_ref("noise", Arc::clone(&old));

        let replaced = registry
            .register("noise", Constant::new(2.0))
            .expect("previous module returned");
        assert!(Arc::ptr_eq(&replaced, &old));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry
                .get("noise")
                .expect("registered")
                .evaluate(0.0, 0.0, 0.0),
            2.0
        );
    }
}
