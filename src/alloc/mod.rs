//! The allocation strategy used by the contiguous collections in this crate.
//!
//! Rather than calling into [`std::alloc`] directly, [`Vector`](crate::collections::contiguous::Vector)
//! routes every allocation, deallocation, construction and destruction through an [`Allocator`].
//! [`Global`] is the default, backed by the global allocator, but any other strategy can be
//! swapped in via [`Vector::new_in`](crate::collections::contiguous::Vector::new_in) without
//! affecting how the Vector grows or shrinks.
#![warn(missing_docs)]

mod global;
mod tests;

use std::ptr::{self, NonNull};

pub use global::*;
#[doc(inline)]
pub use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// A strategy for obtaining and releasing buffers of element slots, as well as constructing and
/// destroying the elements stored in them.
///
/// Only values destroyed in place go through [`destroy`](Allocator::destroy). Values moved out of a
/// collection (by `pop`, `remove`, `replace` or owned iteration) are handed to the caller and
/// dropped wherever they end up, without the strategy seeing them.
///
/// # Safety
/// Collections rely on implementors for memory safety:
/// - A pointer returned by [`allocate`](Allocator::allocate) must be valid for reads and writes of
///   `count` properly aligned `T`s, and must not alias any other live allocation, until it is passed
///   back to [`deallocate`](Allocator::deallocate). Zero-sized requests may return a dangling
///   pointer.
/// - [`construct`](Allocator::construct) must leave a valid `T` at `ptr` and
///   [`destroy`](Allocator::destroy) must leave the slot logically uninitialized, dropping the value
///   at most once.
/// - Allocators may be moved between collections by [`Vector::swap`] and similar methods, so a
///   buffer must remain releasable by any moved copy of the allocator that produced it.
///
/// [`Vector::swap`]: crate::collections::contiguous::Vector::swap
pub unsafe trait Allocator {
    /// Allocates a buffer large enough to hold `count` values of type `T`. The slots within the
    /// buffer are uninitialized.
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the layout of the buffer would exceed
    /// [`isize::MAX`] bytes, or [`ReserveError::AllocError`] if no memory could be obtained.
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, ReserveError>;

    /// Releases a buffer previously obtained from [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate::<T>(count)` on this allocator (or a copy of it)
    /// with the same `count`, and must not have already been deallocated. All values in the buffer
    /// should already have been destroyed or moved out.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize);

    /// Constructs `value` in the uninitialized slot at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writes and properly aligned. Any value previously held in the slot is
    /// overwritten without being dropped.
    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: The caller guarantees that ptr is valid for writes and properly aligned.
        unsafe { ptr.write(value) }
    }

    /// Destroys the value at `ptr`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// `ptr` must point to a valid, initialized `T` which isn't used again after this call.
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        // SAFETY: The caller guarantees that ptr is valid, initialized and ready to drop.
        unsafe { ptr::drop_in_place(ptr.as_ptr()) }
    }
}
