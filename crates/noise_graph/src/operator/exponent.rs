//! Constant exponent operator.
use crate::module::{Module, ModuleRef, SourceSlots};

/// Raises its source module's value to a fixed power.
///
/// Negative values with a fractional exponent produce NaN, per [`f32::powf`].
#[derive(Clone, Debug)]
pub struct Exponent {
    sources: SourceSlots<1>,
    exponent: f32,
}

impl Exponent {
    /// Creates an operator with exponent `1` and an unconnected source.
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::empty(),
            exponent: 1.0,
        }
    }

    pub fn with_source(exponent: f32, source: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([source]),
            exponent,
        }
    }

    pub fn source(&self) -> Option<&ModuleRef> {
        self.sources.get(0)
    }

    pub fn set_source(&mut self, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(0, source)
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent;
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Exponent {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sources
            .expect(0, "Exponent")
            .evaluate(x, y, z)
            .powf(self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{Constant, ModuleExt};

    fn approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn raises_to_configured_power() {
        let mut e = Exponent::with_source(2.0, Constant::new(0.6).into_ref());
        approx_eq(e.evaluate(0.0, 0.0, 0.0), 0.36);

        e.set_exponent(0.5);
        assert_eq!(e.exponent(), 0.5);
        approx_eq(e.evaluate(0.0, 0.0, 0.0), 0.6f32.sqrt());
    }

    #[test]
    fn fractional_power_of_negative_is_nan() {
        let e = Exponent::with_source(0.5, Constant::new(-4.0).into_ref());
        assert!(e.evaluate(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "Exponent: source slot 0 is not connected")]
    fn unconnected_source_panics() {
        Exponent::new().evaluate(0.0, 0.0, 0.0);
    }
}
