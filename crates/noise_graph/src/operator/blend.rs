//! Linear blend between two sources driven by a control source.
use crate::module::{Module, ModuleRef, SourceSlots};

/// Interpolates between two sources using a third as the weight.
///
/// Slot `0` and slot `1` are the endpoints, slot `2` is the control. A control value of
/// `-1` outputs the first source, `1` outputs the second; values outside that range
/// extrapolate.
#[derive(Clone, Debug, Default)]
pub struct Blend {
    sources: SourceSlots<3>,
}

impl Blend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sources(a: ModuleRef, b: ModuleRef, control: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([a, b, control]),
        }
    }

    pub fn source(&self, index: usize) -> Option<&ModuleRef> {
        self.sources.get(index)
    }

    #[track_caller]
    pub fn set_source(&mut self, index: usize, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(index, source)
    }

    pub fn control(&self) -> Option<&ModuleRef> {
        self.sources.get(2)
    }

    pub fn set_control(&mut self, control: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(2, control)
    }
}

impl Module for Blend {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        let a = self.sources.expect(0, "Blend").evaluate(x, y, z);
        let b = self.sources.expect(1, "Blend").evaluate(x, y, z);
        let control = self.sources.expect(2, "Blend").evaluate(x, y, z);
        let t = (control + 1.0) * 0.5;
        a + (b - a) * t
    }
}
