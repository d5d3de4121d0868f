//! A module containing [`Slot`], an in-place nullable value holder.
//!
//! [`Slot`] stores its value inline in uninitialized storage next to an
//! engaged flag, rather than boxing it; [`EmptyAccess`] is the error for
//! reading a slot that holds nothing.

mod slot;
mod tests;

pub use slot::*;

#[doc(inline)]
pub use crate::util::error::EmptyAccess;
