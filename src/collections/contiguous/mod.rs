//! Contiguous collections: [`RawBuffer`] for bare storage ownership and
//! [`Vector`] for a growable sequence of live elements on top of it.

pub mod raw_buffer;
pub mod vector;

#[doc(inline)]
pub use raw_buffer::RawBuffer;
#[doc(inline)]
pub use vector::Vector;
