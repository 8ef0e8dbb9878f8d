//! Fixed-arity source slots.
//!
//! [`SourceSlots`] holds exactly `N` optional [`ModuleRef`] handles. The arity is part of
//! the type, so an operator can never hold more or fewer slots than it reads. Slots may
//! start empty and be wired later; reading an empty slot during evaluation panics.
use std::fmt;

use super::{Module, ModuleRef};

/// Exactly `N` source slots, each empty or holding a shared module handle.
#[derive(Clone)]
pub struct SourceSlots<const N: usize> {
    slots: [Option<ModuleRef>; N],
}

impl<const N: usize> SourceSlots<N> {
    /// Creates `N` empty slots.
    pub fn empty() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Creates slots with every position connected.
    pub fn connected(modules: [ModuleRef; N]) -> Self {
        Self {
            slots: modules.map(Some),
        }
    }

    /// Number of slots.
    #[inline]
    pub const fn arity(&self) -> usize {
        N
    }

    /// Returns the module connected at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ModuleRef> {
        self.slots.get(index)?.as_ref()
    }

    /// Connects `module` at `index`, returning the previously connected module.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[track_caller]
    pub fn set(&mut self, index: usize, module: ModuleRef) -> Option<ModuleRef> {
        assert!(
            index < N,
            "source slot {index} out of range for a module with {N} inputs"
        );
        self.slots[index].replace(module)
    }

    /// Disconnects and returns the module at `index`.
    pub fn take(&mut self, index: usize) -> Option<ModuleRef> {
        self.slots.get_mut(index)?.take()
    }

    /// Returns `true` if every slot is connected.
    pub fn is_connected(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the first empty slot.
    pub fn first_unconnected(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns the module at `index` for evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty or out of range. `owner` names the evaluating module
    /// in the panic message.
    #[inline]
    #[track_caller]
    pub fn expect(&self, index: usize, owner: &str) -> &dyn Module {
        match self.slots.get(index) {
            Some(Some(module)) => module.as_ref(),
            _ => panic!("{owner}: source slot {index} is not connected"),
        }
    }
}

impl<const N: usize> Default for SourceSlots<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> fmt::Debug for SourceSlots<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|s| s.as_ref().map(|_| "connected")))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::module::{Constant, ModuleExt};

    #[test]
    fn empty_slots_report_first_gap() {
        let mut slots = SourceSlots::<3>::empty();
        assert_eq!(slots.arity(), 3);
        assert!(!slots.is_connected());
        assert_eq!(slots.first_unconnected(), Some(0));

        slots.set(0, Constant::new(1.0).into_ref());
        slots.set(2, Constant::new(2.0).into_ref());
        assert_eq!(slots.first_unconnected(), Some(1));

        slots.set(1, Constant::new(3.0).into_ref());
        assert!(slots.is_connected());
        assert_eq!(slots.first_unconnected(), None);
    }

    #[test]
    fn set_returns_replaced_module() {
        let a = Constant::new(1.0).into_ref();
        let b = Constant::new(2.0).into_ref();
        let mut slots = SourceSlots::connected([Arc::clone(&a)]);

        let previous = slots.set(0, b).expect("slot was connected");
        assert!(Arc::ptr_eq(&previous, &a));
        assert_eq!(slots.expect(0, "test").evaluate(0.0, 0.0, 0.0), 2.0);
    }

    #[test]
    fn take_disconnects_slot() {
        let mut slots = SourceSlots::connected([Constant::new(1.0).into_ref()]);
        assert!(slots.take(0).is_some());
        assert!(slots.get(0).is_none());
        assert!(slots.take(5).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut slots = SourceSlots::<1>::empty();
        slots.set(1, Constant::new(0.0).into_ref());
    }

    #[test]
    #[should_panic(expected = "Blend: source slot 1 is not connected")]
    fn expect_on_empty_slot_panics() {
        let mut slots = SourceSlots::<2>::connected([
            Constant::new(0.0).into_ref(),
            Constant::new(0.0).into_ref(),
        ]);
        slots.take(1);
        slots.expect(1, "Blend");
    }

    #[test]
    fn debug_hides_module_internals() {
        let mut slots = SourceSlots::<2>::empty();
        slots.set(1, Constant::new(0.0).into_ref());
        assert_eq!(format!("{slots:?}"), "[None, Some(\"connected\")]");
    }
}
