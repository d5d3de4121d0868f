//! A small family of generic containers built directly on raw, uninitialized
//! storage: a growable [`Vector`](collections::contiguous::Vector), a
//! single-slot nullable holder ([`Slot`](collections::slot::Slot)) and a
//! doubly linked [`LinkedList`](collections::linked::LinkedList).
//!
//! # Purpose
//! The point of these types is the memory-management discipline underneath
//! them, not the API surface on top. Raw storage acquisition is kept strictly
//! separate from element construction and destruction: a
//! [`RawBuffer`](collections::contiguous::RawBuffer) only ever allocates and
//! releases bytes, while the containers above it decide which slots hold live
//! values and keep that bookkeeping correct across growth, assignment,
//! cloning and teardown. None of the element storage in this crate goes
//! through [`Vec`] or [`Box`].
//!
//! # Error Handling
//! Accessors that can reasonably fail return [`Result`] or [`Option`] with
//! strongly typed errors (enums for unions, ZST structs for leaves, all
//! implementing [`Error`](std::error::Error)). Operations whose failure would
//! mean a caller bug either panic with a checked message (indexing) or are
//! exposed as documented-`unsafe` unchecked variants for callers who have
//! already done the proof themselves.
//!
//! # Safety
//! There is a fair amount of unsafe code here; every unsafe block carries a
//! comment stating the invariant it relies on. The load-bearing invariants
//! are listed on each container type.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
