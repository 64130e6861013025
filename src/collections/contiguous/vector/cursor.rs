use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr::{self, NonNull};
use std::slice;

use super::Vector;
use crate::alloc::Allocator;
use crate::util::error::CursorOutOfBounds;
use crate::util::result::ResultExtension;

/// A read-only position within a [`Vector`](super::Vector), pointing at one of its elements or one
/// past the end. See [`Vector::begin`](super::Vector::begin) and
/// [`Vector::end`](super::Vector::end) to create one.
///
/// A Cursor borrows the Vector it was created from, so any operation that would invalidate it
/// (reallocating, inserting, erasing) can't be called until it is gone. Cursors can be moved
/// anywhere in `0..=len` by offsetting them with `+`, `-`, `+=` and `-=`, compared with other
/// Cursors from the same Vector and subtracted from each other to find the distance between them.
/// Cursors belonging to different Vectors are never equal or ordered, even if both are empty.
///
/// [`iter`](Cursor::iter) borrows every element from the Cursor's position to the end.
///
/// # Examples
/// ```
/// # use contiguous_vector::vector;
/// let vec = vector![1, 2, 3, 4];
/// let mut cursor = vec.begin() + 1;
/// assert_eq!(cursor.get(), Some(&2));
/// cursor += 2;
/// assert_eq!(cursor.get(), Some(&4));
/// assert_eq!(vec.end() - cursor, 1);
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor.get(), None);
/// ```
pub struct Cursor<'a, T> {
    pub(crate) owner: *const (),
    pub(crate) ptr: NonNull<T>,
    pub(crate) index: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

/// A position within a [`Vector`](super::Vector) that allows the element it points to to be
/// mutated. The mutable counterpart to [`Cursor`], which it can be converted into (but not back
/// from). See [`Vector::begin_mut`](super::Vector::begin_mut),
/// [`Vector::insert`](super::Vector::insert) and [`Vector::erase`](super::Vector::erase).
///
/// # Examples
/// ```
/// # use contiguous_vector::vector;
/// # use contiguous_vector::collections::contiguous::Cursor;
/// let mut vec = vector![1, 2, 3];
/// let mut cursor = vec.begin_mut() + 2;
/// if let Some(value) = cursor.get_mut() {
///     *value *= 10;
/// }
/// let cursor = Cursor::from(cursor);
/// assert_eq!(cursor.get(), Some(&30));
/// assert_eq!(vec, [1, 2, 30]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) owner: *const (),
    pub(crate) ptr: NonNull<T>,
    pub(crate) index: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

/// Moves `index` by `offset`, staying within `0..=len`.
///
/// # Panics
/// Panics if the resulting index would be outside of `0..=len`.
#[track_caller]
fn shift(index: usize, len: usize, offset: isize) -> usize {
    match index.checked_add_signed(offset) {
        Some(new_index) if new_index <= len => new_index,
        _ => Err(CursorOutOfBounds { index, offset, len }).throw(),
    }
}

/// Like [`shift`], but backwards.
///
/// # Panics
/// Panics if the resulting index would be outside of `0..=len`.
#[track_caller]
fn shift_back(index: usize, len: usize, offset: isize) -> usize {
    match offset.checked_neg() {
        Some(neg) => shift(index, len, neg),
        None => Err(CursorOutOfBounds { index, offset, len }).throw(),
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new<A: Allocator>(vec: &'a Vector<T, A>, index: usize) -> Cursor<'a, T> {
        let slice: &'a [T] = vec;
        Cursor {
            owner: ptr::from_ref(vec).cast(),
            ptr: NonNull::from(slice).cast(),
            index,
            len: slice.len(),
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the element that this Cursor points to. A Cursor at the end returns
    /// the length of the Vector.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the Cursor points one past the last element.
    pub const fn is_end(&self) -> bool {
        self.index == self.len
    }

    /// Returns a reference to the element under the Cursor, or None if it is at the end.
    pub const fn get(&self) -> Option<&'a T> {
        if self.index < self.len {
            // SAFETY: index < len, so the pointer is in bounds of the borrowed slice and points to
            // an initialized value which is shared for 'a.
            Some(unsafe { self.ptr.add(self.index).as_ref() })
        } else {
            None
        }
    }

    /// Moves the Cursor forward by one element.
    ///
    /// # Panics
    /// Panics if the Cursor is already at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the Cursor back by one element.
    ///
    /// # Panics
    /// Panics if the Cursor is already at the start.
    #[track_caller]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// Returns an iterator over the elements from this Cursor to the end of the Vector. The Cursor
    /// itself isn't moved.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let vec = vector![1, 2, 3];
    /// let cursor = vec.begin() + 1;
    /// assert_eq!(cursor.iter().sum::<i32>(), 5);
    /// assert_eq!(cursor.index(), 1);
    /// ```
    pub fn iter(&self) -> slice::Iter<'a, T> {
        // SAFETY: index <= len, so the range is within the borrowed slice.
        unsafe {
            slice::from_raw_parts(self.ptr.add(self.index).as_ptr(), self.len - self.index).iter()
        }
    }

    /// Returns a slice containing all elements from this Cursor up to (but not including) `end`.
    ///
    /// # Panics
    /// Panics if `end` belongs to a different Vector or comes before this Cursor.
    ///
    /// # Examples
    /// ```
    /// # use contiguous_vector::vector;
    /// let vec = vector!['a', 'b', 'c', 'd'];
    /// assert_eq!((vec.begin() + 1).slice_until(vec.end() - 1), &['b', 'c']);
    /// ```
    #[track_caller]
    pub fn slice_until(self, end: Cursor<'a, T>) -> &'a [T] {
        match self.partial_cmp(&end) {
            Some(Ordering::Less | Ordering::Equal) => (),
            _ => panic!("Cursor range end must follow its start within the same collection!"),
        }

        // SAFETY: Both cursors belong to the same Vector, so they share a base pointer and length,
        // and index <= end.index <= len keeps the range within the borrowed slice.
        unsafe {
            slice::from_raw_parts(self.ptr.add(self.index).as_ptr(), end.index - self.index)
        }
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new<A: Allocator>(vec: &'a mut Vector<T, A>, index: usize) -> CursorMut<'a, T> {
        let owner = ptr::from_ref(&*vec).cast();
        let slice: &'a mut [T] = vec;
        CursorMut {
            owner,
            len: slice.len(),
            ptr: NonNull::from(slice).cast(),
            index,
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the element that this CursorMut points to. A CursorMut at the end
    /// returns the length of the Vector.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns true if the CursorMut points one past the last element.
    pub const fn is_end(&self) -> bool {
        self.index == self.len
    }

    /// Returns a reference to the element under the CursorMut, or None if it is at the end.
    pub const fn get(&self) -> Option<&T> {
        if self.index < self.len {
            // SAFETY: index < len, so the pointer is in bounds of the borrowed slice. The returned
            // reference borrows self, so it can't coexist with a mutable one.
            Some(unsafe { self.ptr.add(self.index).as_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element under the CursorMut, or None if it is at the end.
    pub const fn get_mut(&mut self) -> Option<&mut T> {
        if self.index < self.len {
            // SAFETY: index < len, so the pointer is in bounds of the uniquely borrowed slice. The
            // returned reference mutably borrows self, so it is the only reference to the value.
            Some(unsafe { self.ptr.add(self.index).as_mut() })
        } else {
            None
        }
    }

    /// Consumes the CursorMut, returning a mutable reference to the element it pointed to for the
    /// rest of the borrow, or None if it was at the end.
    pub const fn into_mut(self) -> Option<&'a mut T> {
        if self.index < self.len {
            // SAFETY: index < len and self is consumed, so no other reference to the value can be
            // created through this CursorMut.
            Some(unsafe { self.ptr.add(self.index).as_mut() })
        } else {
            None
        }
    }

    /// Returns a read-only Cursor at the same position, borrowing this CursorMut.
    pub const fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            owner: self.owner,
            ptr: self.ptr,
            index: self.index,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Moves the CursorMut forward by one element.
    ///
    /// # Panics
    /// Panics if the CursorMut is already at the end.
    #[track_caller]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    /// Moves the CursorMut back by one element.
    ///
    /// # Panics
    /// Panics if the CursorMut is already at the start.
    #[track_caller]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(value: CursorMut<'a, T>) -> Self {
        Cursor {
            owner: value.owner,
            ptr: value.ptr,
            index: value.index,
            len: value.len,
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: isize) {
        self.index = shift(self.index, self.len, rhs);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: isize) {
        self.index = shift_back(self.index, self.len, rhs);
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, rhs: isize) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, rhs: isize) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Returns the signed distance from `rhs` to self.
    fn sub(self, rhs: Self) -> Self::Output {
        self.index as isize - rhs.index as isize
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: isize) {
        self.index = shift(self.index, self.len, rhs);
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: isize) {
        self.index = shift_back(self.index, self.len, rhs);
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, rhs: isize) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, rhs: isize) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Cursors are only ordered relative to other Cursors into the same Vector.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner == other.owner {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

impl<T> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: A Cursor is equivalent to a shared reference into the Vector, so it can be sent to or
// shared with other threads whenever &T can.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
// SAFETY: A CursorMut is equivalent to a mutable reference into the Vector, so it follows the
// rules for &mut T.
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
// SAFETY: Shared access to a CursorMut only ever produces &T.
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
