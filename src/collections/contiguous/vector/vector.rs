use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::IndexOutOfBounds;
use crate::collections::contiguous::RawBuffer;

const GROWTH_FACTOR: usize = 2;

/// A growable contiguous sequence, built on [`RawBuffer`].
///
/// The buffer only ever owns bytes; the Vector decides which slots hold live
/// elements and constructs, moves and drops them itself.
///
/// # Invariants
/// - `len <= buf.cap()`.
/// - Slots `[0, len)` hold live elements; slots `[len, cap)` are raw,
///   unconstructed storage.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` / `cap` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// \* When the Vector is full, `push` relocates every element, taking `O(n)`.
/// Growth is geometric, so a sequence of `n` pushes still costs `O(n)` in
/// total.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be
    /// allocated when the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided
    /// value, allowing values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: RawBuffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. The capacity is exactly
    /// the value requested from the last reallocation, never an
    /// overallocation.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push the provided value onto the end of the Vector, increasing the
    /// capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition
        // of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that
    /// there is enough capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity
    /// to add the provided value, using methods like
    /// [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to do
    /// so. Using this method on a Vector without spare capacity is undefined
    /// behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees len < cap, so the slot is raw storage
        // inside the allocation.
        unsafe { self.buf.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned
    /// value if the Vector has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..5).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so the slot counts as raw storage
            // from here on.
            self.len -= 1;

            // SAFETY: The slot held the last live element a moment ago; the
            // bitwise read moves it out and nothing will drop it in place.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Returns a reference to the element at `index`, or an
    /// [`IndexOutOfBounds`] error describing the failed access.
    ///
    /// Infallible indexing is available through `vec[index]` (via the slice
    /// deref), which panics on an out-of-bounds index.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.try_get(2), Ok(&2));
    /// assert!(vec.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.deref().get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Ensures the capacity is at least `new_cap`, relocating every live
    /// element into a fresh buffer if it is not. Never shrinks and never
    /// changes the length.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10, "reserve never shrinks");
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap() {
            self.relocate(new_cap);
        }
    }

    /// Drops every element in place, leaving the length 0 and the capacity
    /// untouched.
    pub fn clear(&mut self) {
        // Reset len first: if an element's drop panics, the rest leak rather
        // than being dropped twice by the Vector's own Drop.
        let len = mem::replace(&mut self.len, 0);
        for i in 0..len {
            // SAFETY: Slots below the old len held live elements, each
            // dropped exactly once here.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }
    }

    /// Exchanges the contents of two Vectors in constant time.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector of `len` value-initialized elements, with capacity
    /// exactly `len`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let vec: Vector<u32> = Vector::repeat_default(4);
    /// assert_eq!(&*vec, &[0, 0, 0, 0]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn repeat_default(len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        vec.resize(len);
        vec
    }

    /// Resizes the Vector to `new_len` elements: value-initializing the new
    /// tail when growing, dropping the excess tail when shrinking. Shrinking
    /// keeps the current capacity.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.resize(5);
    /// vec.resize(2);
    /// assert_eq!(vec.len(), 2);
    /// assert!(vec.cap() >= 5);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        self.reserve(new_len);

        if new_len > self.len {
            for i in self.len..new_len {
                // SAFETY: reserve has made every slot below new_len part of
                // the allocation; slots at and above len are raw storage.
                unsafe { self.buf.slot(i).write(T::default()) }

                // Count the element as soon as it exists, so a later
                // default() panicking doesn't leak the tail written so far.
                self.len = i + 1;
            }
        } else {
            // Commit the new length first: if an element's drop panics, the
            // rest of the tail leaks rather than being dropped a second time
            // by the Vector's own Drop.
            let old_len = mem::replace(&mut self.len, new_len);
            for i in new_len..old_len {
                // SAFETY: Slots in [new_len, old_len) hold live elements,
                // each dropped exactly once here.
                unsafe { ptr::drop_in_place(self.buf.slot(i)) }
            }
        }
    }
}

impl<T> Vector<T> {
    /// Relocates all live elements into a fresh buffer of capacity `new_cap`
    /// and releases the old block.
    ///
    /// The transfer is a bitwise move: it cannot fail partway through, which
    /// is what makes unconditional growth safe. The old buffer is released
    /// without dropping anything, because its elements now live in the new
    /// block.
    pub(crate) fn relocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut fresh = RawBuffer::with_cap(new_cap);

        // SAFETY: Both buffers are distinct allocations (or dangling for a
        // ZST, where the copy is a no-op) with room for at least len
        // elements.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr.as_ptr(), fresh.ptr.as_ptr(), self.len);
        }

        // The old block, now in `fresh`, is deallocated here without touching
        // the moved-out elements.
        self.buf.swap(&mut fresh);
    }

    pub(crate) fn grow(&mut self) {
        // cap * size_of::<T>() <= isize::MAX for sized elements, so doubling
        // cannot overflow usize; Layout::array re-checks the product.
        self.relocate(cmp::max(self.cap() * GROWTH_FACTOR, 1));
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        for i in 0..self.len {
            // SAFETY: Slots below len hold live elements; each is dropped in
            // place exactly once. The buffer deallocates itself afterwards.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are live, properly aligned elements.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are live, properly aligned elements,
        // borrowed exclusively through self.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep-copies every element in index order into a Vector with capacity
    /// exactly equal to the source's length. If an element's clone panics,
    /// the partially built copy unwinds and frees itself; the source is never
    /// touched.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            // SAFETY: vec was created with capacity for every element of
            // self.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }

    /// Build-then-swap: the full independent copy is constructed first, and
    /// only then exchanged into `self`, so a failed clone leaves `self`
    /// exactly as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
