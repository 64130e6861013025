use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::{AllocError, Allocator, CapacityOverflow, ReserveError};

/// The default allocation strategy, which forwards all requests to the global allocator.
///
/// Zero-sized layouts (either a zero count or a zero-sized `T`) aren't allocated at all, a dangling
/// pointer is returned instead and ignored again during deallocation.
///
/// # Examples
/// ```
/// # use contiguous_vector::alloc::{Allocator, Global};
/// let ptr = Global.allocate::<u32>(4).expect("allocation failed");
/// // SAFETY: ptr was just allocated with a count of 4.
/// unsafe {
///     ptr.write(7);
///     assert_eq!(ptr.read(), 7);
///     Global.deallocate(ptr, 4);
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

impl Global {
    /// A helper function to create a [`Layout`] for use during allocation, containing `count`
    /// number of elements of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout<T>(count: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(count).map_err(|_| CapacityOverflow)
    }
}

// SAFETY: All allocations are made with Layout::array, so they are properly aligned and valid for
// count values. Zero-sized layouts are never passed to the global allocator.
unsafe impl Allocator for Global {
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, ReserveError> {
        let layout = Global::make_layout::<T>(count)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        NonNull::new(raw_ptr).ok_or(AllocError { layout }.into())
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        // A layout that overflows could never have been allocated, so there is nothing to release.
        let Ok(layout) = Global::make_layout::<T>(count) else { return };

        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated by this allocator with the same
            // count, and therefore the same layout. Zero-sized layouts aren't allocated and are
            // guarded against deallocation.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}
