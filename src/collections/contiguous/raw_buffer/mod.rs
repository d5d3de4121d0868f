//! A module containing [`RawBuffer`], the storage-only foundation of
//! [`Vector`](super::Vector).

mod raw_buffer;

pub use raw_buffer::*;
