//! Releasable resource slots
//!
//! Readers and writers own their internal state through `EngineHandle`,
//! which can be released ahead of drop. A released handle stays usable as
//! a value; operations through it observe the empty slot and report a bad
//! argument instead of panicking. Releasing twice is a no-op.

/// A slot holding engine state until it is explicitly released
#[derive(Debug)]
pub struct EngineHandle<T> {
    slot: Option<T>,
}

impl<T> EngineHandle<T> {
    /// Create a live handle
    pub fn new(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Borrow the state, if not yet released
    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Mutably borrow the state, if not yet released
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// True once the state has been released
    pub fn is_released(&self) -> bool {
        self.slot.is_none()
    }

    /// Drop the state now
    ///
    /// Returns true if this call performed the release, false if the
    /// handle was already empty.
    pub fn release(&mut self) -> bool {
        self.slot.take().is_some()
    }
}

impl<T: Default> Default for EngineHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
