//! Internal buffer reuse.
//!
//! Not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
