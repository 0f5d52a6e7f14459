//! Streaming transform API.
//!
//! - [`StreamTransformer`] - Configures and drives transform runs
//! - [`MaskIter`] - Iterator yielding transformed chunks from a
//!   [`std::io::Read`] source

mod iter;

pub use iter::{MaskIter, StreamTransformer};
