//! Absolute value operator.
use crate::module::{Module, ModuleRef, SourceSlots};

/// Outputs the absolute value of its source module's value.
#[derive(Clone, Debug, Default)]
pub struct Abs {
    sources: SourceSlots<1>,
}

impl Abs {
    /// Creates an operator with an unconnected source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an operator reading `source`.
    pub fn with_source(source: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([source]),
        }
    }

    pub fn source(&self) -> Option<&ModuleRef> {
        self.sources.get(0)
    }

    /// Connects the source module, returning the previous one.
    pub fn set_source(&mut self, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(0, source)
    }
}

impl Module for Abs {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        self.sources.expect(0, "Abs").evaluate(x, y, z).abs()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::module::{Constant, FnSource, ModuleExt};

    fn abs_of(v: f32) -> f32 {
        Abs::with_source(Constant::new(v).into_ref()).evaluate(0.0, 0.0, 0.0)
    }

    #[test]
    fn erases_sign() {
        assert_eq!(abs_of(-3.5), 3.5);
        assert_eq!(abs_of(3.5), 3.5);
        assert_eq!(abs_of(-0.0).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn follows_float_semantics_for_non_finite_values() {
        assert_eq!(abs_of(f32::NEG_INFINITY), f32::INFINITY);
        assert_eq!(abs_of(f32::INFINITY), f32::INFINITY);
        assert!(abs_of(f32::NAN).is_nan());
    }

    #[test]
    fn magnitude_is_symmetric_for_random_values() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..256 {
            let v = f32::from_bits(rng.next_u32());
            if v.is_nan() {
                continue;
            }
            let a = abs_of(v);
            assert_eq!(a, abs_of(-v));
            assert!(a >= 0.0);
        }
    }

    #[test]
    fn evaluates_source_at_the_given_coordinate() {
        let abs = Abs::with_source(FnSource::new(|x, y, z| x - y - z).into_ref());
        assert_eq!(abs.evaluate(1.0, 2.0, 3.0), 4.0);
        assert_eq!(abs.evaluate(6.0, 2.0, 3.0), 1.0);
    }

    #[test]
    fn source_can_be_connected_after_construction() {
        let mut abs = Abs::new();
        assert_eq!(abs.required_inputs(), 1);
        assert!(abs.source().is_none());

        assert!(abs.set_source(Constant::new(-1.0).into_ref()).is_none());
        assert_eq!(abs.evaluate(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    #[should_panic(expected = "Abs: source slot 0 is not connected")]
    fn unconnected_source_panics() {
        Abs::new().evaluate(0.0, 0.0, 0.0);
    }
}
