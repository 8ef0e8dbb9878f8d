//! Range clamping operator.
//!
//! The bounds are stored in a single atomic word so that every evaluation reads a
//! consistent `(minimum, maximum)` pair, and so the bounds can be retuned on a clamp that
//! is already shared across a graph.
//!
//! Bounds are not validated when set. If `minimum > maximum` when the clamp is evaluated,
//! the pair is swapped in place before comparing, so after the first evaluation the
//! accessors report the ordered bounds. The swap is a single compare-exchange, making
//! concurrent evaluation of an inverted clamp race-free.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::module::{Module, ModuleRef, SourceSlots};

pub const DEFAULT_CLAMP_MINIMUM: f32 = -1.0;
pub const DEFAULT_CLAMP_MAXIMUM: f32 = 1.0;

/// Restricts its source module's value to `[minimum, maximum]`, inclusive.
pub struct Clamp {
    sources: SourceSlots<1>,
    bounds: PackedBounds,
}

impl Clamp {
    /// Creates a clamp to `[-1, 1]` with an unconnected source.
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::empty(),
            bounds: PackedBounds::new(DEFAULT_CLAMP_MINIMUM, DEFAULT_CLAMP_MAXIMUM),
        }
    }

    /// Creates a clamp to `[minimum, maximum]` reading `source`.
    pub fn with_source(minimum: f32, maximum: f32, source: ModuleRef) -> Self {
        Self {
            sources: SourceSlots::connected([source]),
            bounds: PackedBounds::new(minimum, maximum),
        }
    }

    pub fn source(&self) -> Option<&ModuleRef> {
        self.sources.get(0)
    }

    /// Connects the source module, returning the previous one.
    pub fn set_source(&mut self, source: ModuleRef) -> Option<ModuleRef> {
        self.sources.set(0, source)
    }

    pub fn minimum(&self) -> f32 {
        self.bounds.load().0
    }

    pub fn maximum(&self) -> f32 {
        self.bounds.load().1
    }

    /// Current `(minimum, maximum)` pair, read atomically.
    pub fn bounds(&self) -> (f32, f32) {
        self.bounds.load()
    }

    pub fn set_minimum(&self, minimum: f32) {
        self.bounds.update(|(_, max)| (minimum, max));
    }

    pub fn set_maximum(&self, maximum: f32) {
        self.bounds.update(|(min, _)| (min, maximum));
    }

    /// Replaces both bounds at once.
    pub fn set_bounds(&self, minimum: f32, maximum: f32) {
        self.bounds.store(minimum, maximum);
    }
}

impl Default for Clamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Clamp {
    fn clone(&self) -> Self {
        let (min, max) = self.bounds.load();
        Self {
            sources: self.sources.clone(),
            bounds: PackedBounds::new(min, max),
        }
    }
}

impl fmt::Debug for Clamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.bounds.load();
        f.debug_struct("Clamp")
            .field("sources", &self.sources)
            .field("minimum", &min)
            .field("maximum", &max)
            .finish()
    }
}

impl Module for Clamp {
    fn required_inputs(&self) -> usize {
        self.sources.arity()
    }

    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        let source = self.sources.expect(0, "Clamp");
        let (min, max) = self.bounds.load_ordered();

        // Plain comparisons: NaN passes through, and `f32::clamp` would panic on NaN bounds.
        let v = source.evaluate(x, y, z);
        if v < min {
            min
        } else if v > max {
            max
        } else {
            v
        }
    }
}

struct PackedBounds(AtomicU64);

impl PackedBounds {
    fn new(min: f32, max: f32) -> Self {
        Self(AtomicU64::new(pack(min, max)))
    }

    #[inline]
    fn load(&self) -> (f32, f32) {
        unpack(self.0.load(Ordering::Acquire))
    }

    fn store(&self, min: f32, max: f32) {
        self.0.store(pack(min, max), Ordering::Release);
    }

    fn update(&self, f: impl Fn((f32, f32)) -> (f32, f32)) {
        let _ = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                let (min, max) = f(unpack(bits));
                Some(pack(min, max))
            });
    }

    /// Loads the bounds, swapping an inverted pair in place first.
    #[inline]
    fn load_ordered(&self) -> (f32, f32) {
        let bits = self.0.load(Ordering::Acquire);
        let (min, max) = unpack(bits);
        if min > max {
            // Lose quietly if a setter raced us; the new bounds apply from the next call.
            if self
                .0
                .compare_exchange(bits, pack(max, min), Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                trace!(minimum = max, maximum = min, "swapped inverted clamp bounds");
            }
            return (max, min);
        }
        (min, max)
    }
}

#[inline]
fn pack(min: f32, max: f32) -> u64 {
    (u64::from(min.to_bits()) << 32) | u64::from(max.to_bits())
}

#[inline]
fn unpack(bits: u64) -> (f32, f32) {
    (f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}
