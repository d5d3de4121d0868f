use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The value of an empty [`Slot`](crate::collections::slot::Slot) was
/// requested.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyAccess;

impl Display for EmptyAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access the value of an empty slot!")
    }
}

impl Error for EmptyAccess {}

/// An index at or past the end of a collection was requested.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Union of the ways an indexed element access can fail.
#[derive(Debug, PartialEq, Display, Error, From, TryInto, IsVariant)]
pub enum AccessError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyAccess(EmptyAccess),
}
