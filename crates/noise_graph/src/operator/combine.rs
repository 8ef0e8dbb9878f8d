//! Binary operators combining two source modules.
//!
//! Each operator reads slot `0` as the left operand and slot `1` as the right operand.
//! NaN from either side propagates, including through [`Min`] and [`Max`].
use crate::module::{Module, ModuleRef, SourceSlots};

macro_rules! binary_operator {
    ($(#[$doc:meta])* $name:ident, |$a:ident, $b:ident| $body:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            sources: SourceSlots<2>,
        }

        impl $name {
            /// Creates an operator with both sources unconnected.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates an operator reading `lhs` and `rhs`.
            pub fn with_sources(lhs: ModuleRef, rhs: ModuleRef) -> Self {
                Self {
                    sources: SourceSlots::connected([lhs, rhs]),
                }
            }

            pub fn source(&self, index: usize) -> Option<&ModuleRef> {
                self.sources.get(index)
            }

            /// Connects the source at `index` (`0` or `1`), returning the previous one.
            ///
            /// # Panics
            ///
            /// Panics if `index > 1`.
            #[track_caller]
            pub fn set_source(&mut self, index: usize, source: ModuleRef) -> Option<ModuleRef> {
                self.sources.set(index, source)
            }
        }

        impl Module for $name {
            fn required_inputs(&self) -> usize {
                self.sources.arity()
            }

            #[inline]
            fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
                let $a = self.sources.expect(0, stringify!($name)).evaluate(x, y, z);
                let $b = self.sources.expect(1, stringify!($name)).evaluate(x, y, z);
                $body
            }
        }
    };
}

binary_operator!(
    /// Outputs the sum of its two sources.
    Add,
    |a, b| a + b
);

binary_operator!(
    /// Outputs the left source minus the right source.
    Subtract,
    |a, b| a - b
);

binary_operator!(
    /// Outputs the product of its two sources.
    Multiply,
    |a, b| a * b
);

binary_operator!(
    /// Outputs the smaller of its two sources.
    Min,
    |a, b| nan_or(a, b, f32::min)
);

binary_operator!(
    /// Outputs the larger of its two sources.
    Max,
    |a, b| nan_or(a, b, f32::max)
);

binary_operator!(
    /// Raises the left source to the power of the right source.
    Power,
    |a, b| a.powf(b)
);

#[inline]
fn nan_or(a: f32, b: f32, f: fn(f32, f32) -> f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        f(a, b)
    }
}
