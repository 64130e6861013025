//! Contiguous collection types. Namely [`Vector`], a contiguous collection that varies in size at
//! runtime.
#![warn(missing_docs)]

pub mod vector;

#[doc(inline)]
pub use vector::{Cursor, CursorMut, Vector};
