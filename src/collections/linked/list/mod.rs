//! A module containing [`LinkedList`] and associated types.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;

#[doc(inline)]
pub use crate::util::error::{AccessError, IndexOutOfBounds};
