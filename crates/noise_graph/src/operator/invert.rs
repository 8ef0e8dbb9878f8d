//! Sign inversion operator.
use crate::module::{Module, ModuleRef, SourceSlots};

/// Outputs the negated value of its source module.
#[derive(Clone, Debug, Default)]
pub struct Invert {
    sources: SourceSlots<1>,
}

impl Invert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([source]),
        }
    }

    pub fn source(&self) -> Option<&ModuleRef> {
        self.sources.get(0)
    }

    pub fn set_source(&mut self, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(0, source)
    }
}

impl Module for Invert {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        -self.sources.expect(0, "Invert").evaluate(x, y, z)
    }
}
