use std::alloc::Layout;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the initialized elements of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// The requested capacity would need a buffer larger than [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The allocation strategy was unable to provide memory for the contained [`Layout`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Memory allocation of {} bytes failed!", layout.size())]
pub struct AllocError {
    /// The layout of the buffer that couldn't be allocated.
    pub layout: Layout,
}

/// The reasons that a buffer can fail to be (re)allocated.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ReserveError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocError`].
    AllocError(AllocError),
}

/// A cursor was moved outside of `0..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor at {index} can't move by {offset} in collection with {len} elements!")]
pub struct CursorOutOfBounds {
    /// The index of the cursor before moving.
    pub index: usize,
    /// The offset it was moved by.
    pub offset: isize,
    /// The length of the collection.
    pub len: usize,
}
