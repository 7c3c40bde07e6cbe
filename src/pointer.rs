//! Address before and after a single pointer increment.

use std::fmt;
use std::mem;

use serde::Serialize;

/// One pointer increment, recorded as plain addresses.
///
/// `after - before` is always `pointee_size`: a `*const T` moves by
/// `size_of::<T>()` bytes per unit, not by one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerStep {
    pub label: &'static str,
    pub pointee_size: usize,
    pub before: usize,
    pub after: usize,
}

impl PointerStep {
    /// Records the address of `value` and the address one `T` past it.
    pub fn of<T>(label: &'static str, value: &T) -> Self {
        let before = value as *const T;
        // SAFETY: one past the end of a single live object stays in bounds
        // of that allocation, and the result is never dereferenced.
        let after = unsafe { before.add(1) };
        Self::from_ptrs(label, before, after)
    }

    /// Same as [`PointerStep::of`] but starting from an arbitrary address.
    /// Nothing is dereferenced, so any address is fine.
    pub fn at_address<T>(label: &'static str, addr: usize) -> Self {
        let before = addr as *const T;
        let after = before.wrapping_add(1);
        Self::from_ptrs(label, before, after)
    }

    fn from_ptrs<T>(label: &'static str, before: *const T, after: *const T) -> Self {
        PointerStep {
            label,
            pointee_size: mem::size_of::<T>(),
            before: before as usize,
            after: after as usize,
        }
    }

    pub fn stride(&self) -> usize {
        self.after.wrapping_sub(self.before)
    }

    pub fn before_ptr(&self) -> *const () {
        self.before as *const ()
    }

    pub fn after_ptr(&self) -> *const () {
        self.after as *const ()
    }
}

impl fmt::Display for PointerStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pointer: {:p} -> {:p} (+{} bytes)",
            self.label,
            self.before_ptr(),
            self.after_ptr(),
            self.stride()
        )
    }
}
