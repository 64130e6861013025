//! A contiguous, growable array container with a pluggable allocation strategy.
//!
//! # Purpose
//! This crate provides [`Vector`](collections::contiguous::Vector), a dynamic array that owns a
//! single buffer of element slots, the first `len` of which are initialized. Unlike [`Vec`], its
//! capacity is always exactly what was last requested (or what the growth policy chose), which makes
//! the memory behavior of every operation easy to predict and test.
//!
//! Positions within a Vector are represented by [`Cursor`](collections::contiguous::Cursor) and
//! [`CursorMut`](collections::contiguous::CursorMut), which support random access arithmetic and
//! can't outlive (or observe a reallocation of) the Vector they belong to.
//!
//! # Allocation
//! All memory is obtained through the [`Allocator`](alloc::Allocator) trait, which also constructs
//! and destroys elements. [`Global`](alloc::Global) forwards to the global allocator and is used
//! unless another strategy is supplied via one of the `_in` constructors.
//!
//! # Error Handling
//! Most methods panic rather than returning a [`Result`], because it isn't ergonomic to handle the
//! possibility of a capacity overflow every time you push into a Vector. Where failure is expected
//! (checked access, reserving with a fallible allocator), a strongly typed error is returned
//! instead, using enums for static dispatch with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! Every operation leaves the Vector in a valid state if it panics. Operations that build a new
//! Vector (cloning, filling with defaults) destroy everything they had built and release their
//! allocation before the panic continues.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::contiguous::Vector;
