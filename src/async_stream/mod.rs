//! Async stream adapter for the transform.
//!
//! Available with the `async-io` feature. Runtime-agnostic via
//! `futures_io::AsyncRead`.

mod stream;

pub use stream::{MaskStream, mask_async};
