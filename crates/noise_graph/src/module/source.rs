//! Leaf modules without source slots.
//!
//! Noise generators are provided by callers; [`FnSource`] adapts any thread-safe closure
//! into a [`Module`] so such generators can be wired into a graph.
use std::fmt;

use super::Module;

/// Outputs the same value at every coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl Default for Constant {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Module for Constant {
    fn required_inputs(&self) -> usize {
        0
    }

    #[inline]
    fn evaluate(&self, _x: f32, _y: f32, _z: f32) -> f32 {
        self.value
    }
}

/// Adapts a closure `(x, y, z) -> value` into a module.
///
/// The closure should be deterministic in its inputs.
pub struct FnSource<F>
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    f: F,
}

impl<F> FnSource<F>
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Module for FnSource<F>
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    fn required_inputs(&self) -> usize {
        0
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        (self.f)(x, y, z)
    }
}

impl<F> fmt::Debug for FnSource<F>
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}
