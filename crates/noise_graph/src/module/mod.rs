//! The module contract shared by every node of a module graph.
//!
//! A module maps a 3D coordinate to a scalar. Operator modules derive their value from
//! source modules connected to a fixed number of [`SourceSlots`]; leaf modules such as
//! [`Constant`] and [`FnSource`] synthesize a value from the coordinate alone.
//!
//! Modules are shared through [`ModuleRef`] handles, so one sub-graph can feed several
//! parents. Graphs must be acyclic; evaluation recurses depth-first from the root.
use std::sync::Arc;

use mint::Vector3;

pub mod slots;
pub mod source;

pub use slots::SourceSlots;
pub use source::{Constant, FnSource};

/// Shared handle to a module. Several parents may hold the same child.
pub type ModuleRef = Arc<dyn Module>;

/// A node of a module graph: a pure function of a 3D coordinate.
///
/// Implementors must:
/// - fix [`Module::required_inputs`] at construction,
/// - compute [`Module::evaluate`] only from their sources and their own configuration,
/// - panic when a required source slot is unconnected instead of returning a default,
/// - keep any mutable state inside their own instance and safe to touch from several threads.
pub trait Module: Send + Sync {
    /// Number of source modules this module reads. Never changes after construction.
    fn required_inputs(&self) -> usize;

    /// Returns the output value at the given coordinate.
    ///
    /// # Panics
    ///
    /// Panics if a required source slot is not connected.
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<M: Module + ?Sized> Module for Arc<M> {
    #[inline]
    fn required_inputs(&self) -> usize {
        (**self).required_inputs()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).evaluate(x, y, z)
    }
}

impl<M: Module + ?Sized> Module for Box<M> {
    #[inline]
    fn required_inputs(&self) -> usize {
        (**self).required_inputs()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).evaluate(x, y, z)
    }
}

/// Point-based helpers available on every [`Module`].
pub trait ModuleExt: Module {
    /// Evaluates the module at a point given as any `mint`-compatible vector (e.g. `glam::Vec3`).
    #[inline]
    fn sample(&self, p: impl Into<Vector3<f32>>) -> f32 {
        let p = p.into();
        self.evaluate(p.x, p.y, p.z)
    }

    /// Evaluates the module at each point, in order.
    fn sample_points<P>(&self, points: &[P]) -> Vec<f32>
    where
        P: Copy + Into<Vector3<f32>>,
    {
        points.iter().map(|&p| self.sample(p)).collect()
    }

    /// Moves the module into a shared [`ModuleRef`] handle.
    fn into_ref(self) -> ModuleRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<M: Module + ?Sized> ModuleExt for M {}
