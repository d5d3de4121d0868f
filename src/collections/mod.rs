//! The containers themselves, grouped by storage strategy.
//!
//! # Method
//! Everything here is built on the same split between raw storage and element
//! lifetime: [`contiguous`] owns flat uninitialized buffers, [`slot`] owns a
//! single in-place value with an engaged flag, and [`linked`] threads indexed
//! nodes through an arena, each node reusing the slot discipline for its
//! payload. Applicable types implement
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which supplies
//! the more repetitive slice functionality for free.

pub mod contiguous;
pub mod linked;
pub mod slot;
