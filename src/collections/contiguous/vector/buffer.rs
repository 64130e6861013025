use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::alloc::{Allocator, ReserveError};

/// An owned, capacity-sized slab of uninitialized `T` slots, obtained from and returned to an
/// [`Allocator`]. RawBuf never reads, writes or drops the values in its slots, it only tracks the
/// allocation itself. Keeping track of which slots are initialized is up to the owner.
///
/// A RawBuf with capacity 0 holds a dangling pointer and no allocation.
pub(crate) struct RawBuf<T, A: Allocator> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub(crate) const fn new_in(alloc: A) -> RawBuf<T, A> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a new RawBuf with exactly `cap` uninitialized slots.
    ///
    /// # Errors
    /// Returns an error if `alloc` fails to allocate the buffer.
    pub(crate) fn try_with_cap_in(cap: usize, alloc: A) -> Result<RawBuf<T, A>, ReserveError> {
        let mut buf = RawBuf::new_in(alloc);
        if cap != 0 {
            buf.ptr = buf.alloc.allocate(cap)?;
            buf.cap = cap;
        }
        Ok(buf)
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the buffer.
    pub(crate) const unsafe fn slot(&self, index: usize) -> NonNull<T> {
        // SAFETY: The caller guarantees that index is within (or one past the end of) the
        // allocation, which can't exceed isize::MAX bytes.
        unsafe { self.ptr.add(index) }
    }

    /// Moves to a new buffer with exactly `new_cap` slots, relocating the first `len` values. The
    /// old buffer is released afterwards. If the new allocation fails, self is left untouched.
    ///
    /// A `new_cap` of 0 releases the buffer without allocating a new one.
    ///
    /// # Safety
    /// `len` must be less than or equal to both `new_cap` and the current capacity, and the first
    /// `len` slots must be initialized.
    ///
    /// # Errors
    /// Returns an error if the allocator fails to provide the new buffer.
    pub(crate) unsafe fn try_realloc(
        &mut self,
        new_cap: usize,
        len: usize,
    ) -> Result<(), ReserveError> {
        let new_ptr = match new_cap {
            0 => NonNull::dangling(),
            _ => self.alloc.allocate::<T>(new_cap)?,
        };

        if len != 0 {
            // SAFETY: Both buffers are valid for len values, properly aligned and don't overlap
            // because new_ptr is a fresh allocation. The old copies are forgotten once the buffer is
            // released, so every value is moved exactly once. A bitwise move can't fail, so this
            // can't leave either buffer half-migrated.
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr().cast_const(), new_ptr.as_ptr(), len);
            }
        }

        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Returns the allocation to the allocator without touching the values held within it, leaving
    /// an empty RawBuf behind.
    fn release(&mut self) {
        if self.cap != 0 {
            // SAFETY: ptr was allocated by alloc with a count of cap and hasn't been released yet,
            // because cap is reset to 0 whenever it is.
            unsafe { self.alloc.deallocate(self.ptr, self.cap) }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // Any values still held are the responsibility of the owner, only the memory is released
        // here.
        self.release();
    }
}
