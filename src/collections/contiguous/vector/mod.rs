//! A module containing [`Vector`] and associated types.
//!
//! Other than [`Vector`] itself, this includes [`Cursor`] and [`CursorMut`] for positions within a
//! Vector and [`IntoIter`] for owned iteration. [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod buffer;
mod cursor;
mod iter;
mod macros;
mod vector;

pub use cursor::*;
pub use iter::*;
pub use vector::*;
#[doc(inline)]
pub use crate::util::error::{CursorOutOfBounds, IndexOutOfBounds};
