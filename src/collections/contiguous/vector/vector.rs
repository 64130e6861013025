use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::buffer::RawBuf;
use super::{Cursor, CursorMut};
use crate::alloc::{Allocator, CapacityOverflow, Global, ReserveError};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, generic over the [`Allocator`] used to manage its buffer.
///
/// The first `len` slots of the buffer always hold initialized values, the remaining `cap - len`
/// slots are allocated but uninitialized. Unlike [`Vec`], the capacity is guaranteed to be exactly
/// the value requested by any of the capacity manipulation methods, and only grows by itself when
/// pushing or inserting into a full Vector, in which case the capacity is doubled (or set to 1 from
/// empty).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `emplace` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)`**, `O(m)` |
/// | `clear` | `O(n)` |
/// | `take` | `O(1)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector::new_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_cap_in(cap, Global)
    }

    /// Creates a new Vector containing `len` default values, with the capacity equal to the
    /// length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(5);
    /// assert_eq!(vec.len(), 5);
    /// assert_eq!(vec.cap(), 5);
    /// assert_eq!(vec, [0; 5]);
    /// ```
    pub fn with_len(len: usize) -> Vector<T>
    where
        T: Default,
    {
        Vector::with_len_in(len, Global)
    }

    /// Creates a new Vector containing `count` copies of `value`, with the capacity equal to the
    /// length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec = Vector::from_elem(10, 4);
    /// assert_eq!(vec, [10, 10, 10, 10]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        Vector::from_elem_in(value, count, Global)
    }

    /// Creates a Vector from a type which implements [`IntoIterator`] and creates an
    /// [`ExactSizeIterator`]. The capacity of the Vector is equal to the reported length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec = Vector::from_range(1_u8..=3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn from_range<I>(iter: I) -> Vector<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Vector::from_range_in(iter, Global)
    }

    /// Creates a Vector by cloning every element in the range `[first, last)` of another Vector.
    ///
    /// # Panics
    /// Panics if `last` comes before `first` or belongs to another Vector.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let source = Vector::from_range([1, 2, 3, 4, 5]);
    /// let vec = Vector::from_cursors(source.begin() + 1, source.end());
    /// assert_eq!(vec, [2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn from_cursors(first: Cursor<'_, T>, last: Cursor<'_, T>) -> Vector<T>
    where
        T: Clone,
    {
        Vector::from_range(first.slice_until(last).iter().cloned())
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates a new, empty Vector which will use `alloc` for all allocations. Nothing is allocated
    /// until the capacity changes.
    pub const fn new_in(alloc: A) -> Vector<T, A> {
        Vector {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates a new Vector with exactly `cap` capacity, allocated with `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn with_cap_in(cap: usize, alloc: A) -> Vector<T, A> {
        Vector {
            buf: RawBuf::try_with_cap_in(cap, alloc).throw(),
            len: 0,
        }
    }

    /// Creates a new Vector containing `len` default values, allocated with `alloc`.
    ///
    /// If creating one of the default values panics, all previously created values are dropped and
    /// the allocation is released before the panic continues.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn with_len_in(len: usize, alloc: A) -> Vector<T, A>
    where
        T: Default,
    {
        let mut vec = Vector::with_cap_in(len, alloc);

        for _ in 0..len {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(T::default()) }
        }

        vec
    }

    /// Creates a new Vector containing `count` copies of `value`, allocated with `alloc`. The
    /// original value is moved into the last slot.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn from_elem_in(value: T, count: usize, alloc: A) -> Vector<T, A>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap_in(count, alloc);

        if count != 0 {
            for _ in 1..count {
                // SAFETY: vec has been created with the right capacity.
                unsafe { vec.push_unchecked(value.clone()) }
            }
            // SAFETY: As above, there is exactly one slot left.
            unsafe { vec.push_unchecked(value) }
        }

        vec
    }

    /// Creates a Vector from an [`ExactSizeIterator`], allocated with `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn from_range_in<I>(iter: I, alloc: A) -> Vector<T, A>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut vec = Vector::with_cap_in(iter.len(), alloc);

        for item in iter {
            // ExactSizeIterator isn't unsafe to implement incorrectly, so this can't be unchecked.
            vec.push(item);
        }

        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec = Vector::from_range(1_u8..=3);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns a reference to the allocation strategy used by this Vector.
    pub const fn allocator(&self) -> &A {
        &self.buf.alloc
    }

    /// Returns a reference to the element at `index`, checking that it is in bounds first. Plain
    /// indexing (`vec[index]`) also checks bounds, but panics rather than returning an error.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let vec = vector![1, 2, 3];
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`, checking that it is in bounds first.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a reference to the first element, or None if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, or None if the Vector is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, or None if the Vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, or None if the Vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow().throw();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, so the slot at len is allocated and uninitialized.
        unsafe { self.buf.alloc.construct(self.buf.slot(self.len), value) }
        self.len += 1;
    }

    /// Constructs a new element at the end of the Vector from `args`, following the same growth
    /// policy as [`push`](Vector::push). Returns a mutable reference to the new element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    /// vec.emplace("hello").push_str(" world");
    /// assert_eq!(vec.back().map(String::as_str), Some("hello world"));
    /// ```
    pub fn emplace<Args>(&mut self, args: Args) -> &mut T
    where
        T: From<Args>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Constructs a new element at the end of the Vector with the value returned by `f`, which is
    /// only called once there is room for it. Returns a mutable reference to the new element.
    ///
    /// If `f` panics, the Vector keeps its previous elements (but may have grown).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.len == self.cap() {
            self.grow().throw();
        }

        let index = self.len;
        // SAFETY: There is capacity for at least one more item.
        unsafe {
            self.push_unchecked(f());
            self.buf.slot(index).as_mut()
        }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from_range(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector. The
            // value at len was initialized and is now outside of the Vector, so it is moved out
            // exactly once.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Inserts the provided value before the element at `index`, moving items as necessary. An
    /// `index` equal to the length appends the value. Returns a [`CursorMut`] pointing at the
    /// inserted value.
    ///
    /// Unlike [`push`](Vector::push), a full Vector only grows by a single slot, so the capacity
    /// becomes exactly `len + 1`.
    ///
    /// Elements are shifted by relocating them, so `T` doesn't need to be [`Default`] or [`Clone`].
    ///
    /// # Panics
    /// Panics if `index > len`, or if growing the Vector fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from_range(0..3);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// let index = vec.insert(3, 300).index();
    /// vec.insert(6, 400);
    /// assert_eq!(index, 3);
    /// assert_eq!(vec, [0, 200, 100, 300, 1, 2, 400]);
    /// assert_eq!(vec.cap(), 7);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> CursorMut<'_, T> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len == self.cap() {
            let new_cap = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
            self.reserve(new_cap);
        }

        let old_len = self.len;
        // If construction panics, the shifted tail is leaked rather than dropped twice.
        self.len = index;

        // SAFETY: There is capacity for old_len + 1 values and index <= old_len. ptr::copy handles
        // the overlapping ranges, after which the slot at index is logically uninitialized.
        unsafe {
            let hole = self.buf.slot(index);
            ptr::copy(hole.as_ptr().cast_const(), hole.add(1).as_ptr(), old_len - index);
            self.buf.alloc.construct(hole, value);
        }

        self.len = old_len + 1;
        CursorMut::new(self, index)
    }

    /// Removes and destroys the element at `index`, moving all following values to fill in the
    /// gap. Returns a [`CursorMut`] pointing to the element that followed the erased one, which
    /// is now at `index` (or the end, if the erased element was last). Erasing at `index == len` is
    /// a no-op.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2, 3];
    /// assert_eq!(vec.erase(1).get(), Some(&3));
    /// assert!(vec.erase(1).is_end());
    /// assert!(vec.erase(1).is_end());
    /// assert_eq!(vec, [1]);
    /// ```
    pub fn erase(&mut self, index: usize) -> CursorMut<'_, T> {
        if index != self.len {
            let removed = self.remove(index);
            self.dispose(removed);
        }

        CursorMut::new(self, index)
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the value is initialized. It is read out before the following
        // values are moved over the top of it, and len is decremented so that the last slot (now
        // a duplicate) is forgotten.
        unsafe {
            let hole = self.buf.slot(index);
            let value = hole.read();
            ptr::copy(
                hole.add(1).as_ptr().cast_const(),
                hole.as_ptr(),
                self.len - index - 1,
            );
            self.len -= 1;
            value
        }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);
        mem::replace(&mut self[index], new_value)
    }

    /// Destroys all elements in the Vector, leaving the capacity untouched.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the Vector to `len` elements, destroying the rest in index order. Has no effect if
    /// the Vector is already shorter. The capacity is left untouched.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len { return; }

        // If a destructor panics, the rest are leaked rather than dropped twice.
        self.len = len;

        for i in len..old_len {
            // SAFETY: All values in len..old_len are initialized and no longer considered part of
            // the Vector.
            unsafe { self.buf.alloc.destroy(self.buf.slot(i)) }
        }
    }

    /// Ensures that the Vector has a capacity of at least `new_cap`. If it doesn't already, the
    /// Vector is moved to a new allocation with a capacity of exactly `new_cap`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails. The Vector is left untouched either way.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).throw()
    }

    /// A fallible version of [`reserve`](Vector::reserve).
    ///
    /// # Errors
    /// Returns [`ReserveError::CapacityOverflow`] if the memory layout of the Vector would have a
    /// size that exceeds [`isize::MAX`], or [`ReserveError::AllocError`] if the allocator fails. In
    /// both cases the Vector is left untouched.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() { return Ok(()); }

        // SAFETY: len <= cap < new_cap and all values < len are initialized.
        unsafe { self.buf.try_realloc(new_cap, self.len) }
    }

    /// Resizes the Vector to `new_len`, filling any new slots with default values or destroying
    /// the elements past `new_len` when shrinking. When growing past the capacity, the capacity
    /// becomes exactly `new_len`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.resize(5);
    /// assert_eq!(vec, [1, 2, 3, 0, 0]);
    /// assert_eq!(vec.cap(), 5);
    /// vec.resize(2);
    /// assert_eq!(vec, [1, 2]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the Vector to `new_len`, filling any new slots with values returned by `f`. If `f`
    /// panics, the elements created so far remain in the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);

        while self.len < new_len {
            // SAFETY: The capacity is at least new_len.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length. An empty Vector releases
    /// its allocation entirely.
    ///
    /// # Panics
    /// Panics if the allocation fails, in which case the Vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_len(5);
    /// vec.reserve(20);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 5);
    /// vec.clear();
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().throw()
    }

    /// A fallible version of [`shrink_to_fit`](Vector::shrink_to_fit).
    ///
    /// # Errors
    /// Returns an error if the allocator fails to provide the smaller buffer. The Vector is left
    /// untouched.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        if self.len == self.cap() { return Ok(()); }

        // SAFETY: len < cap and all values < len are initialized.
        unsafe { self.buf.try_realloc(self.len, self.len) }
    }

    /// Moves all elements from `other` onto the end of self, releasing other's allocation.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`] or
    /// the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2];
    /// vec.append(vector![3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn append<B: Allocator>(&mut self, mut other: Vector<T, B>) {
        let new_len = self.len.checked_add(other.len).ok_or(CapacityOverflow).throw();
        self.reserve(new_len);

        // SAFETY: self has capacity for new_len values, so the slots from len to new_len are
        // allocated and uninitialized. other holds other.len initialized values in a separate
        // allocation.
        unsafe {
            ptr::copy_nonoverlapping(
                other.buf.ptr.as_ptr().cast_const(),
                self.buf.slot(self.len).as_ptr(),
                other.len,
            );
        }

        self.len = new_len;
        // The values now belong to self, so other only releases its allocation when dropped.
        other.len = 0;
    }

    /// Swaps the contents (including the allocator) of self and `other`, without touching any of
    /// the elements.
    pub fn swap(&mut self, other: &mut Vector<T, A>) {
        mem::swap(self, other);
    }

    /// Moves all of the contents out of self into a new Vector in constant time, leaving self empty
    /// with capacity 0 and a copy of the allocator.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let mut vec = vector![1, 2, 3];
    /// let taken = vec.take();
    /// assert_eq!(taken, [1, 2, 3]);
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn take(&mut self) -> Vector<T, A>
    where
        A: Clone,
    {
        let alloc = self.buf.alloc.clone();
        mem::replace(self, Vector::new_in(alloc))
    }

    /// Returns a [`Cursor`] pointing to the first element (or the end, if the Vector is empty).
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a [`Cursor`] pointing one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Returns a read-only [`Cursor`] pointing to the first element. Equivalent to
    /// [`begin`](Vector::begin), which is already read-only.
    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    /// Returns a read-only [`Cursor`] pointing one past the last element. Equivalent to
    /// [`end`](Vector::end), which is already read-only.
    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    /// Returns a [`CursorMut`] pointing to the first element (or the end, if the Vector is empty).
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Grows the buffer to allow for the insertion of additional elements. After calling this, the
    /// Vector can take at least one more element.
    ///
    /// # Errors
    /// Returns an error if the grown Vector wouldn't fit in [`isize::MAX`] bytes or the allocation
    /// fails.
    pub(crate) fn grow(&mut self) -> Result<(), ReserveError> {
        let new_cap = match self.len.checked_mul(GROWTH_FACTOR) {
            Some(doubled) => cmp::max(doubled, MIN_CAP),
            // Only reachable for zero-sized types.
            None => self.len.checked_add(1).ok_or(CapacityOverflow)?,
        };

        self.try_reserve(new_cap)
    }

    /// Destroys a value which has already been moved out of the Vector using the allocation
    /// strategy.
    pub(crate) fn dispose(&self, value: T) {
        let mut value = ManuallyDrop::new(value);
        // SAFETY: value is initialized and ManuallyDrop prevents it from being dropped again.
        unsafe { self.buf.alloc.destroy(NonNull::from(&mut *value)) }
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len
            }).throw()
        }
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    /// Pushes every item onto the end of the Vector. When the lower bound of the iterator's size
    /// doesn't fit, the capacity grows to at least double the length, so repeated small extends
    /// stay amortized like [`push`](Vector::push).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let needed = self.len.saturating_add(iter.size_hint().0);
        if needed > self.cap() {
            self.reserve(cmp::max(needed, self.len.saturating_mul(GROWTH_FACTOR)));
        }

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for Vector<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap_in(iter.size_hint().0, A::default());

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, A: Allocator + Default, const N: usize> From<[T; N]> for Vector<T, A> {
    fn from(value: [T; N]) -> Self {
        Vector::from_range_in(value, A::default())
    }
}

impl<T: Clone, A: Allocator + Default> From<&[T]> for Vector<T, A> {
    fn from(value: &[T]) -> Self {
        Vector::from_range_in(value.iter().cloned(), A::default())
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // Destroy all initialized values in index order.
        self.truncate(0);

        // Implicitly drop self.buf, which releases the allocation without touching its slots.
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't accessed due to this function taking a
        // &mut self. The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, A: Allocator> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T
// and the allocator are Send.
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T, A> can safely implement Sync when T and A are Sync.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    /// Clones every element into a new allocation with the same capacity as self. If cloning an
    /// element panics, the clones made so far are dropped and the new allocation is released.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap_in(self.cap(), self.buf.alloc.clone());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }

    /// Clones `source` into a temporary Vector and swaps it with self, so that self is untouched if
    /// cloning panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: PartialEq<U>, U, A: Allocator, B: Allocator> PartialEq<Vector<U, B>> for Vector<T, A> {
    fn eq(&self, other: &Vector<U, B>) -> bool {
        **self == **other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Vector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        **self == *other
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
