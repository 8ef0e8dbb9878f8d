#![forbid(unsafe_code)]
//! noise_graph: Composable module graphs for procedural scalar fields.
//!
//! Modules:
//! - module: the evaluation contract every node implements, shared handles and source slots
//! - operator: nodes that transform or combine the values of their source modules
//! - graph: author, validate, and assemble module graphs from declarative node specs
//!
//! Source modules that synthesize noise live outside this crate and plug in through
//! [`module::Module`], [`module::FnSource`], or a [`graph::ModuleRegistry`].
pub mod error;
pub mod graph;
pub mod module;
pub mod operator;

/// Convenient re-exports for common types. Import with `use noise_graph::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::graph::compiler::GraphCompiler;
    pub use crate::graph::spec::ModuleGraphSpec;
    pub use crate::graph::{ModuleGraph, ModuleId, ModuleRegistry, ModuleSpec};
    pub use crate::module::{Constant, FnSource, Module, ModuleExt, ModuleRef, SourceSlots};
    pub use crate::operator::{
        Abs, Add, Blend, Clamp, Exponent, Invert, Max, Min, Multiply, Power, ScaleBias, Subtract,
    };
}
