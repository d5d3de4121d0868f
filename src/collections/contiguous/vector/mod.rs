//! A module containing [`Vector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration; [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed
//! iteration via the [`Deref`](std::ops::Deref) impl.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
