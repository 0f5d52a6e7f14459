//! Keystream engine.
//!
//! - [`Masker`] - Stateful push engine that applies the keystream to
//!   buffers of any size, chaining the stream offset across calls.

mod engine;

pub use engine::Masker;
