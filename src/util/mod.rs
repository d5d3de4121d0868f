pub mod error;
pub mod option;
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod panic;
