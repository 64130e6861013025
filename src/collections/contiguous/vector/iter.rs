use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::Vector;
use super::buffer::RawBuf;
use crate::alloc::{Allocator, Global};

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: vec is never dropped or used again, so the buffer is moved out exactly once.
            buf: unsafe { ptr::read(&vec.buf) },
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Any values that haven't been yielded when the IntoIter is dropped are destroyed, and the buffer
/// is returned to the Vector's allocator.
pub struct IntoIter<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Returns the values which haven't been yielded yet as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and haven't been moved out. start <= end
        // <= cap.
        unsafe { slice::from_raw_parts(self.buf.slot(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized and hasn't been moved out. It is
            // excluded from start..end afterwards, so this happens only once.
            let value = unsafe { self.buf.slot(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.start;
        (left, Some(left))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: As with next, the value at end is initialized and now excluded.
            Some(unsafe { self.buf.slot(self.end).read() })
        } else {
            None
        }
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;

        for i in start..end {
            // SAFETY: The values in start..end haven't been yielded, so they are still initialized.
            unsafe { self.buf.alloc.destroy(self.buf.slot(i)) }
        }

        // Implicitly drop self.buf, releasing the allocation.
    }
}

impl<T: Debug, A: Allocator> Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// SAFETY: IntoIter uniquely owns its buffer, just like Vector.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
// SAFETY: IntoIter only exposes shared references through &self.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}
