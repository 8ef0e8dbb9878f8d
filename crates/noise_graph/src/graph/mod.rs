//! Declarative assembly of module graphs.
//!
//! This module groups types for describing a module graph as a map of node specs keyed by
//! id, resolving host-provided source modules through a registry, and compiling the
//! description into shared, ready-to-evaluate modules. A node referenced by several
//! parents is built once and shared.
pub mod assembled;
pub mod compiler;
pub mod node;
pub mod registry;
pub mod spec;

pub use assembled::ModuleGraph;
pub use node::{
    ClampParams, ConstantParams, ExponentParams, ExternalParams, ModuleSpec, ScaleBiasParams,
};
pub use registry::ModuleRegistry;

pub type ModuleId = String;
