use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// An owner of a block of uninitialized storage sized for `cap` elements of
/// `T`.
///
/// A RawBuffer never constructs, moves or drops an element: allocating leaves
/// every slot uninitialized and deallocating releases the block as-is.
/// Whoever writes a value into a slot is responsible for dropping it before
/// the buffer goes away.
///
/// Because duplicating the block would silently duplicate ownership of
/// whatever the caller has constructed inside it, a RawBuffer cannot be
/// cloned. Ownership only ever transfers by moving, or in constant time
/// between two live buffers with [`swap`](RawBuffer::swap).
///
/// # Invariants
/// - `cap == 0` (or a zero-sized `T`) means nothing is allocated and `ptr`
///   dangles.
/// - Otherwise `ptr` refers to a live allocation of exactly `cap` elements.
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with capacity 0 and no allocation.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::RawBuffer;
    /// let buf: RawBuffer<u8> = RawBuffer::new();
    /// assert_eq!(buf.cap(), 0);
    /// ```
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates storage for exactly `cap` elements, all uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`]. On allocation
    /// failure, [`alloc::handle_alloc_error`] is called instead of panicking.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::contiguous::RawBuffer;
    /// let buf: RawBuffer<u64> = RawBuffer::with_cap(5);
    /// assert_eq!(buf.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> RawBuffer<T> {
        let layout = Self::make_layout(cap);

        RawBuffer {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of element slots this buffer owns.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Exchanges the contents of two buffers in constant time, without
    /// touching any element storage. This is the primitive behind
    /// [`Vector`](super::Vector)'s growth and its O(1) swap.
    pub fn swap(&mut self, other: &mut RawBuffer<T>) {
        mem::swap(self, other);
    }

    /// Returns the address of slot `index`.
    ///
    /// # Safety
    /// `index` must be less than [`cap`](RawBuffer::cap). This is a
    /// precondition, not a runtime check: the computed address is only
    /// meaningful inside the allocation.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees index < cap, which was validated
        // against isize::MAX at allocation time.
        unsafe { self.ptr.add(index).as_ptr() }
    }
}

impl<T> RawBuffer<T> {
    /// A helper function to create a [`Layout`] for `cap` elements of `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }

    /// A helper function to allocate for the provided [`Layout`]. Returns a
    /// dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls
    /// [`alloc::handle_alloc_error`] as recommended, to avoid new allocations
    /// rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // Zero-sized layouts were never allocated. Note that no element is
        // dropped here under any circumstances.
        if self.cap != 0 && size_of::<T>() != 0 {
            // The layout was validated when the block was allocated, so
            // rebuilding it cannot overflow.
            let layout = Self::make_layout(self.cap);

            // SAFETY: cap != 0 and T is not zero-sized, so ptr was produced
            // by alloc with this same layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A RawBuffer is an exclusive owner of its allocation; the pointer is
// never shared, so sending the buffer is sending the (inert) storage for its
// element type.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: A RawBuffer exposes no interior mutability; shared references allow
// reading the capacity only.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
