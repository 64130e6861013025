//! General-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality, such as borrowed iteration,
//! searching and sorting.

pub mod contiguous;
