//! Linear remapping operator.
use crate::module::{Module, ModuleRef, SourceSlots};

/// Outputs `value * scale + bias` for its source module's value.
#[derive(Clone, Debug)]
pub struct ScaleBias {
    sources: SourceSlots<1>,
    scale: f32,
    bias: f32,
}

impl ScaleBias {
    /// Creates an identity remap (`scale = 1`, `bias = 0`) with an unconnected source.
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::empty(),
            scale: 1.0,
            bias: 0.0,
        }
    }

    pub fn with_source(scale: f32, bias: f32, source: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([source]),
            scale,
            bias,
        }
    }

    pub fn source(&self) -> Option<&ModuleRef> {
        self.sources.get(0)
    }

    pub fn set_source(&mut self, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(0, source)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }
}

impl Default for ScaleBias {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ScaleBias {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sources.expect(0, "ScaleBias").evaluate(x, y, z) * self.scale + self.bias
    }
}
