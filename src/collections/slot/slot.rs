use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;

use super::EmptyAccess;

/// A single element slot: uninitialized in-place storage for one `T` plus a
/// flag recording whether the storage currently holds a live value.
///
/// This is the same construct-in-place discipline as
/// [`Vector`](crate::collections::contiguous::Vector), reduced to one slot
/// with its own discriminant; [`LinkedList`](crate::collections::linked::LinkedList)
/// uses a Slot as the payload of every node.
///
/// # Invariants
/// - `engaged == true` exactly when `value` holds a live, initialized `T`.
///
/// # Examples
/// ```
/// # use raw_containers::collections::slot::Slot;
/// let mut slot = Slot::new();
/// assert!(!slot.has_value());
///
/// slot.assign(5);
/// assert_eq!(slot.value(), Ok(&5));
///
/// slot.reset();
/// assert!(slot.value().is_err());
/// ```
pub struct Slot<T> {
    value: MaybeUninit<T>,
    engaged: bool,
}

impl<T> Slot<T> {
    /// Creates an empty Slot. No value is constructed.
    pub const fn new() -> Slot<T> {
        Slot {
            value: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// Creates a Slot holding the provided value.
    pub const fn filled(value: T) -> Slot<T> {
        Slot {
            value: MaybeUninit::new(value),
            engaged: true,
        }
    }

    /// Returns true if the Slot currently holds a value.
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// Returns a reference to the held value, or [`EmptyAccess`] if the Slot
    /// is empty.
    pub fn value(&self) -> Result<&T, EmptyAccess> {
        if self.engaged {
            // SAFETY: engaged means the storage holds a live value.
            Ok(unsafe { self.value.assume_init_ref() })
        } else {
            Err(EmptyAccess)
        }
    }

    /// Returns a mutable reference to the held value, or [`EmptyAccess`] if
    /// the Slot is empty.
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        if self.engaged {
            // SAFETY: engaged means the storage holds a live value.
            Ok(unsafe { self.value.assume_init_mut() })
        } else {
            Err(EmptyAccess)
        }
    }

    /// Stores `value` in the Slot: assigned over the held value if there is
    /// one (dropping the old value), constructed into the raw storage
    /// otherwise.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::slot::Slot;
    /// let mut slot = Slot::filled("old".to_string());
    /// slot.assign("new".to_string());
    /// assert_eq!(slot.value().map(String::as_str), Ok("new"));
    /// ```
    pub fn assign(&mut self, value: T) {
        if self.engaged {
            // SAFETY: engaged means the storage holds a live value; plain
            // assignment drops it and moves the new value in.
            unsafe { *self.value.assume_init_mut() = value }
        } else {
            self.value.write(value);
            self.engaged = true;
        }
    }

    /// Moves the held value out of the Slot, leaving it empty. Returns
    /// [`None`] if the Slot was already empty.
    pub fn take(&mut self) -> Option<T> {
        if self.engaged {
            self.engaged = false;
            // SAFETY: The flag was set, so the storage held a live value; it
            // is moved out bitwise and the cleared flag prevents any further
            // access or drop in place.
            Some(unsafe { self.value.as_ptr().read() })
        } else {
            None
        }
    }

    /// Drops the held value in place and clears the flag. A no-op on an
    /// empty Slot.
    pub fn reset(&mut self) {
        if self.engaged {
            self.engaged = false;
            // SAFETY: The flag was set, so the storage held a live value,
            // dropped exactly once here.
            unsafe { self.value.assume_init_drop() }
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::filled(value)
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match self.value() {
            Ok(value) => Slot::filled(value.clone()),
            Err(EmptyAccess) => Slot::new(),
        }
    }

    /// Reuses the held value's own `clone_from` when both slots are engaged.
    /// The source cannot alias `self` (`&mut` vs `&`), which is what the
    /// identity check in a by-address implementation would be guarding
    /// against.
    fn clone_from(&mut self, source: &Self) {
        match source.value() {
            Ok(new) if self.engaged => {
                // SAFETY: engaged means the storage holds a live value.
                unsafe { self.value.assume_init_mut().clone_from(new) }
            },
            Ok(new) => {
                self.value.write(new.clone());
                self.engaged = true;
            },
            // Covers both remaining cases: reset is a no-op when self is
            // already empty.
            Err(EmptyAccess) => self.reset(),
        }
    }
}

impl<T: PartialEq> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.value(), other.value()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(EmptyAccess), Err(EmptyAccess)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Slot<T> {}

impl<T: Debug> Debug for Slot<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => f.debug_tuple("Slot").field(value).finish(),
            Err(EmptyAccess) => write!(f, "Slot(empty)"),
        }
    }
}
